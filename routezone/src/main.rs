use clap::Parser;
use routezone::app::{AppConfig, RouteZoneCliArguments};

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = RouteZoneCliArguments::parse();
    let result = match AppConfig::load(args.config_file.as_deref()) {
        Ok(config) => args.op.run(&config).await,
        Err(e) => Err(e),
    };
    let output = result.and_then(|value| Ok(serde_json::to_string_pretty(&value)?));
    match output {
        Ok(json) => {
            println!("{json}");
            log::info!("finished.");
        }
        Err(e) => {
            log::error!("failed running routezone: {e}");
            std::process::exit(1);
        }
    }
}
