use miette::Diagnostic;
use thiserror::Error;

/// Main error type for texgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum TexError {
    #[error("IO error: {0}")]
    #[diagnostic(code(texgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(texgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(texgen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(texgen::invalid_argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(texgen::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(texgen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TexError {
    /// Shorthand for an `InvalidArgument` error without help text.
    pub fn invalid(message: impl Into<String>) -> Self {
        TexError::InvalidArgument {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TexError>;
