//! Error types for metadata preparation.
//!
//! All fallible operations in this crate return [`Result`] with actionable
//! error messages naming the offending input.

use thiserror::Error;

/// Result type alias for metadata preparation operations
pub type Result<T> = std::result::Result<T, LaunchwrapError>;

/// Main error type for all metadata preparation operations
#[derive(Error, Debug)]
pub enum LaunchwrapError {
    /// Project version string does not match the accepted grammar
    #[error("invalid project version '{version}': {reason}")]
    InvalidVersionFormat {
        /// The version string as supplied
        version: String,
        /// Why the string was rejected
        reason: String,
    },

    /// A mandatory collaborator was not supplied
    #[error("missing required input: {input}")]
    MissingRequiredInput {
        /// Name of the missing input
        input: &'static str,
    },

    /// Language identifier is not a known Windows resource language
    #[error("unknown language identifier '{value}'")]
    InvalidLanguage {
        /// The identifier as supplied
        value: String,
    },
}

impl LaunchwrapError {
    pub(crate) fn invalid_version(version: &str, reason: impl Into<String>) -> Self {
        Self::InvalidVersionFormat {
            version: version.to_string(),
            reason: reason.into(),
        }
    }
}
