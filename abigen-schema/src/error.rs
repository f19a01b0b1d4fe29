//! Error types for ABI parsing and validation.

use thiserror::Error;

/// Error type for ABI parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error, with the path of the offending node.
    #[error("invalid ABI JSON at '{path}': {message}")]
    Json {
        /// JSON path of the failing node (`.` for the document root).
        path: String,
        /// Underlying decoder message.
        message: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (struct, variant, type alias, ...).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for ABI validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// An action has no struct describing its parameters.
    #[error("action '{action}' has no struct of the same name")]
    ActionStructNotFound {
        /// Action name.
        action: String,
    },
}

impl ParseError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl SchemaError {
    /// Creates a missing action struct error.
    pub fn action_struct_not_found(action: impl Into<String>) -> Self {
        Self::ActionStructNotFound {
            action: action.into(),
        }
    }
}
