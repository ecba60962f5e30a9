use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("failure building routing client: {0}")]
    ClientBuildError(reqwest::Error),
    #[error("routing request failed: {source}")]
    RequestError {
        #[from]
        source: reqwest::Error,
    },
    #[error("routing service responded with status {0}")]
    StatusError(u16),
    #[error("failure decoding routing response: {0}")]
    DecodeError(String),
    #[error("routing service returned code '{0}'")]
    ServiceError(String),
    #[error("routing service returned no routes")]
    NoRoutes,
    #[error("routing service is not available: {0}")]
    Unavailable(String),
}
