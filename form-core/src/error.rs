//! Error types for form operations.
//!
//! Mutations on a [`Form`](crate::Form) never fail: an unknown field id is a
//! silent no-op. Errors only arise at the boundaries where untyped input enters
//! the core (type tokens, surface events, imported documents).

use thiserror::Error;

/// Result type for form operations.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur at the form core boundaries.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field type token outside the supported set.
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    /// An imported document uses the same field id more than once.
    #[error("Duplicate field id: {0}")]
    DuplicateFieldId(String),

    /// A surface reported a value of the wrong shape for a binding.
    #[error("Invalid input for {binding}: expected {expected}")]
    InvalidInput {
        /// The binding the value was reported for.
        binding: String,
        /// The kind of value the binding accepts.
        expected: &'static str,
    },

    /// Document serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
