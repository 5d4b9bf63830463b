use crate::utils::error::Result;

/// What the binary prints to stdout and the status it exits with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub message: String,
    pub exit_code: u8,
}

impl Report {
    pub fn from_verdict(verdict: &Result<String>) -> Self {
        match verdict {
            Ok(resolved_url) => Self {
                message: format!("OK: Returns url {}", resolved_url),
                exit_code: 0,
            },
            Err(e) => Self {
                message: e.to_string(),
                exit_code: e.exit_code(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}
