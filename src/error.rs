use thiserror::Error;

/// Request-scoped errors raised while resolving and serving a path.
///
/// Every variant maps to exactly one HTTP status code. All failures are
/// terminal for the current request; nothing here is retried and nothing
/// mutates process-wide state.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request path resolves outside the served root (maps to 403)
    #[error("path escapes the served root")]
    Forbidden,

    /// No file or directory exists at the resolved path (maps to 404)
    #[error("no such file or directory")]
    NotFound,

    /// Directory unreadable, stat failure other than not-found, or a
    /// rendering failure (maps to 500)
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for RequestError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => RequestError::NotFound,
            _ => RequestError::Internal(err.to_string()),
        }
    }
}
