use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend answered with status {0}")]
    Status(u16),
    #[error("no user is logged in")]
    NotLoggedIn,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteParamError {
    #[error("route parameter '{0}' is missing")]
    Missing(String),
    #[error("route parameter '{name}' is not a valid id: {value}")]
    Invalid { name: String, value: String },
}
