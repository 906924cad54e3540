//! Error types for script generation

use thiserror::Error;

/// Result type alias for script generation operations
pub type ScriptGenResult<T> = Result<T, ScriptGenError>;

/// Error type for script generation operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptGenError {
    /// A line of a function specification file does not match the grammar
    #[error("malformed function line {line}: \"{text}\" ({reason})")]
    MalformedFunctionLine {
        line: usize,
        text: String,
        reason: String,
    },

    /// A replacement text contains the token it is meant to replace
    #[error("replacement for '{token}' contains the token itself")]
    SelfReferentialSubstitution { token: String },

    /// An argument outside of the documented input domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration that cannot drive generation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScriptGenError {
    /// Returns a stable numeric code for this error kind
    pub fn error_code(&self) -> u32 {
        match self {
            ScriptGenError::MalformedFunctionLine { .. } => 1,
            ScriptGenError::SelfReferentialSubstitution { .. } => 2,
            ScriptGenError::InvalidArgument(_) => 3,
            ScriptGenError::InvalidConfig(_) => 4,
        }
    }

    /// Whether the caller can skip the offending input and carry on
    ///
    /// Only malformed function lines are recoverable: the line is dropped and
    /// parsing continues with the next one.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScriptGenError::MalformedFunctionLine { .. })
    }
}
