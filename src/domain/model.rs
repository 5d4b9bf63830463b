#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub target_url: String,
    pub expected_url: String,
    pub host_override: Option<String>,
}

impl CheckRequest {
    pub fn new(target_url: impl Into<String>, expected_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            expected_url: expected_url.into(),
            host_override: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host_override = Some(host.into());
        self
    }

    /// Host header for the initial request; an empty override counts as none.
    pub fn host(&self) -> Option<&str> {
        self.host_override.as_deref().filter(|host| !host.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub resolved_url: String,
    pub matched: bool,
}
