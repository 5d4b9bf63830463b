use crate::utils::error::Result;
use async_trait::async_trait;

/// Follows a redirect chain and reports the URL of the last request sent.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, target_url: &str, host_override: Option<&str>) -> Result<String>;
}
