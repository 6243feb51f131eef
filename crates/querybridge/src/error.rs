use thiserror::Error;

use crate::types::AbstractLabelOperator;

/// Unified error type for translation and adapter operations
#[derive(Error, Debug)]
pub enum QueryError {
    /// An abstract operator cannot be rendered by the target language
    #[error("Operator {operator} not supported by backend {backend}")]
    UnsupportedOperator {
        operator: AbstractLabelOperator,
        backend: &'static str,
    },

    /// Matcher failed structural validation (e.g. empty label name)
    #[error("Malformed matcher: {0}")]
    MalformedMatcher(String),

    /// Invalid query syntax or parameters
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Operation not supported by this adapter
    #[error("Operation not supported: {0}")]
    OperationNotSupported(String),

    /// A single query's conversion failed
    #[error("Translation failed for query '{ref_id}': {reason}")]
    TranslationFailed { ref_id: String, reason: String },
}

impl QueryError {
    /// Create a malformed matcher error with custom message
    pub fn malformed_matcher(msg: impl Into<String>) -> Self {
        QueryError::MalformedMatcher(msg.into())
    }

    /// Create an invalid query error with custom message
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        QueryError::InvalidQuery(msg.into())
    }

    /// Create an operation not supported error
    pub fn operation_not_supported(msg: impl Into<String>) -> Self {
        QueryError::OperationNotSupported(msg.into())
    }

    /// Create a per-query translation failure
    pub fn translation_failed(ref_id: impl Into<String>, reason: impl Into<String>) -> Self {
        QueryError::TranslationFailed {
            ref_id: ref_id.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
