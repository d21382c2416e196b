//! API Error Taxonomy

use thiserror::Error;

/// Failure modes of a dashboard API request. An empty result list is not an
/// error; callers render it as a distinct placeholder branch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status
    #[error("server returned status {0}")]
    Server(u16),
    /// Body was not the expected shape
    #[error("malformed response: {0}")]
    Parse(String),
}
