use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Error: {message}")]
    Usage { message: String },

    #[error("Error: {}", error_chain(.0))]
    Http(#[from] reqwest::Error),

    #[error("Error: too many redirects (limit {limit}) while fetching {url}")]
    TooManyRedirects { url: String, limit: usize },

    #[error("Error: invalid redirect from {url}: {reason}")]
    InvalidRedirect { url: String, reason: String },

    #[error("WARNING: Target url: {target} . Expected url: {expected} . Returns url {resolved} !")]
    Mismatch {
        target: String,
        expected: String,
        resolved: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Network,
    Mismatch,
}

impl CheckError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Usage { .. } => ErrorCategory::Usage,
            Self::Http(_) | Self::TooManyRedirects { .. } | Self::InvalidRedirect { .. } => {
                ErrorCategory::Network
            }
            Self::Mismatch { .. } => ErrorCategory::Mismatch,
        }
    }

    /// Every failure ends the run with the same status.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

/// Joins an error and all of its sources, outermost first.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
