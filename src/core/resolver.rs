use crate::domain::ports::Resolver;
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, HOST, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use url::Url;

pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Walks the redirect chain itself instead of letting reqwest do it, so the
/// Host override only ever lands on the first request.
#[derive(Debug, Clone)]
pub struct HttpResolver {
    client: Client,
    max_redirects: usize,
}

impl HttpResolver {
    pub fn new() -> Result<Self> {
        Self::with_max_redirects(DEFAULT_MAX_REDIRECTS)
    }

    pub fn with_max_redirects(max_redirects: usize) -> Result<Self> {
        let client = Client::builder().redirect(Policy::none()).build()?;
        Ok(Self {
            client,
            max_redirects,
        })
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }
}

fn is_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}

/// Absolute Locations are kept as the server sent them; relative ones are
/// resolved against the URL the redirecting request went to.
fn next_location(base: &Url, location: &HeaderValue) -> Result<String> {
    let location = location
        .to_str()
        .map_err(|e| CheckError::InvalidRedirect {
            url: base.to_string(),
            reason: format!("Location header is not valid text: {}", e),
        })?;

    if Url::parse(location).is_ok() {
        return Ok(location.to_string());
    }

    base.join(location)
        .map(String::from)
        .map_err(|e| CheckError::InvalidRedirect {
            url: base.to_string(),
            reason: format!("cannot resolve Location '{}': {}", location, e),
        })
}

#[async_trait]
impl Resolver for HttpResolver {
    async fn resolve(&self, target_url: &str, host_override: Option<&str>) -> Result<String> {
        let mut request = self.client.get(target_url);
        if let Some(host) = host_override {
            tracing::debug!("Overriding Host header with: {}", host);
            request = request.header(HOST, host);
        }

        tracing::debug!("GET {}", target_url);
        let mut response = request.send().await?;
        // the text of the last request's URL, never re-serialized
        let mut current = target_url.to_string();
        let mut hops = 0;

        loop {
            let status = response.status();
            tracing::debug!("{} -> {}", current, status);

            if !is_redirect(status) {
                return Ok(current);
            }

            let Some(location) = response.headers().get(LOCATION) else {
                tracing::debug!("Redirect without Location header, stopping at {}", current);
                return Ok(current);
            };

            if hops >= self.max_redirects {
                return Err(CheckError::TooManyRedirects {
                    url: target_url.to_string(),
                    limit: self.max_redirects,
                });
            }
            hops += 1;

            current = next_location(response.url(), location)?;
            tracing::debug!("Following redirect {} to: {}", hops, current);
            response = self.client.get(current.as_str()).send().await?;
        }
    }
}
