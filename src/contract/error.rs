//! Contract error types for the mentors service
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! HTTP Problem Details.

/// Mentors service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentorsError {
    /// No mentor row matched the addressed id
    NotFound {
        /// Mentor identifier
        id: String,
    },
    /// A storage operation failed; carries the storage error text verbatim
    Storage {
        /// Storage error message
        message: String,
    },
}

impl std::fmt::Display for MentorsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { id } => {
                write!(f, "mentor not found: {}", id)
            }
            Self::Storage { message } => {
                write!(f, "storage operation failed: {}", message)
            }
        }
    }
}

impl std::error::Error for MentorsError {}
