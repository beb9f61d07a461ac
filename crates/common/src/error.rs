use thiserror::Error;

/// Boxed error produced by an outbound fetch implementation
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error types that fail a proxy invocation
///
/// Validation problems are not errors at this level: they are answered with a
/// complete 400 response. Everything here terminates the invocation without a
/// response.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The outbound fetch failed (timeout, DNS, connection refused, TLS, body read).
    /// The original error is kept as-is.
    #[error("{0}")]
    Upstream(#[source] BoxError),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProxyError {
    /// Wrap any fetch error without altering it
    pub fn upstream<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Upstream(Box::new(err))
    }
}

/// Type alias for Results using ProxyError
pub type Result<T> = std::result::Result<T, ProxyError>;
