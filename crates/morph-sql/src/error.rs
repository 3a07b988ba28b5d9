//! Error types for morph-sql

use thiserror::Error;

/// Errors raised while tokenizing, parsing or rendering a statement
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SqlError {
    /// Statement text the scanner cannot tokenize (S001)
    #[error("[S001] Error tokenizing '{context}': {message}")]
    Lexical {
        message: String,
        offset: usize,
        context: String,
    },

    /// SQL parse error (S002)
    #[error("[S002] SQL parse error at line {line}, column {column}: {message}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    /// Function called with an unsupported arity or argument (S003)
    #[error("[S003] Error parsing arguments of {function}: {message}")]
    ParseArgument { function: String, message: String },

    /// Construct that cannot be expressed in the target dialect (S004)
    #[error("[S004] Unsupported construct {construct}: {message}")]
    Unsupported { construct: String, message: String },

    /// Empty SQL (S005)
    #[error("[S005] SQL is empty")]
    EmptySql,

    /// Unknown dialect name (S006)
    #[error("[S006] Unknown SQL dialect: {0}")]
    UnknownDialect(String),

    /// Renderer invoked on a node it does not handle (S007)
    #[error("[S007] Internal error: {0}")]
    Internal(String),
}

impl SqlError {
    pub(crate) fn argument(function: &str, message: impl Into<String>) -> Self {
        SqlError::ParseArgument {
            function: function.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn unsupported(construct: impl Into<String>, message: impl Into<String>) -> Self {
        SqlError::Unsupported {
            construct: construct.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;
