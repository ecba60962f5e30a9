mod app_config;
mod app_error;
mod routezone_cli;

pub use app_config::AppConfig;
pub use app_error::AppError;
pub use routezone_cli::{RouteZoneCliArguments, RouteZoneOperation};
