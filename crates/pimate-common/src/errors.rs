use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("failed to open url: {0}")]
    OpenUrl(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// The request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection refused, DNS failure, or TLS handshake failure.
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// A metrics body that cannot become a `SystemSnapshot`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed body: {0}")]
    MalformedBody(String),

    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("field '{0}' is not a number")]
    NotANumber(&'static str),

    #[error("field '{field}' = {value} is out of range [0, 100]")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Failure of a single poll tick. Always non-fatal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PollError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("invalid metrics: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PollerError {
    #[error("poll interval must be greater than zero")]
    InvalidInterval,
}

#[derive(Debug, thiserror::Error)]
pub enum PimateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Poller(#[from] PollerError),

}
