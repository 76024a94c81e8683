use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Upstream transport errors
    #[error("Upstream unavailable: {url} - {message}")]
    UpstreamUnavailable { url: String, message: String },

    #[error("Upstream returned HTTP {status} (URL: {url})")]
    UpstreamHttpError { status: u16, url: String },

    // Payload errors
    #[error("Upstream returned malformed XML: {message}")]
    MalformedPayload { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Create an upstream unavailable error (network failure, timeout, broken body)
    pub fn upstream_unavailable(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an upstream HTTP error for a non-success status code
    pub fn upstream_http_error(status: u16, url: impl Into<String>) -> Self {
        Self::UpstreamHttpError {
            status,
            url: url.into(),
        }
    }

    /// Create a malformed payload error
    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a server error with context
    pub fn server_error(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Check if error originated from talking to an upstream service
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AppError::UpstreamUnavailable { .. }
                | AppError::UpstreamHttpError { .. }
                | AppError::MalformedPayload { .. }
        )
    }
}
