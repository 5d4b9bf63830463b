use crate::core::{CheckRequest, CheckResult, Resolver};
use crate::utils::error::{CheckError, Result};

pub struct RedirectCheck<R: Resolver> {
    resolver: R,
}

impl<R: Resolver> RedirectCheck<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// One attempt, no retries. Transport failures come back as errors; a
    /// mismatch is still a successful run with `matched == false`.
    pub async fn run(&self, request: &CheckRequest) -> Result<CheckResult> {
        tracing::debug!(
            "Checking {} (expecting {})",
            request.target_url,
            request.expected_url
        );

        let resolved_url = self
            .resolver
            .resolve(&request.target_url, request.host())
            .await?;

        // byte-for-byte, no URL normalization
        let matched = resolved_url == request.expected_url;
        if !matched {
            tracing::debug!(
                "Resolved {} does not match expected {}",
                resolved_url,
                request.expected_url
            );
        }

        Ok(CheckResult {
            resolved_url,
            matched,
        })
    }
}

impl CheckResult {
    pub fn into_verdict(self, request: &CheckRequest) -> Result<String> {
        if self.matched {
            Ok(self.resolved_url)
        } else {
            Err(CheckError::Mismatch {
                target: request.target_url.clone(),
                expected: request.expected_url.clone(),
                resolved: self.resolved_url,
            })
        }
    }
}
