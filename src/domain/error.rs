use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Misconfigured: {0}")]
    Misconfigured(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The proxy could not be reached at all (connection refused, DNS, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The proxy answered with a non-2xx status. `message` is the server-supplied
    /// `error` field when the body carried one.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no error message"))]
    Http {
        status: u16,
        message: Option<String>,
    },
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn misconfigured(msg: impl Into<String>) -> Self {
        Self::Misconfigured(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn http(status: u16, message: Option<String>) -> Self {
        Self::Http { status, message }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_misconfigured(&self) -> bool {
        matches!(self, Self::Misconfigured(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}
