use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::ScrapeError;

/// HTTP client for public storefront pages.
///
/// Wraps a `reqwest::Client` with a fixed `User-Agent`, a total request
/// timeout, and redirect following (reqwest's default policy). One instance
/// is built per inbound API request; nothing here is shared across requests.
///
/// Non-200 statuses and network failures surface as typed [`ScrapeError`]s.
/// Whether a failed page means "field absent" is decided at the call site,
/// not swallowed here.
pub struct StorefrontClient {
    client: Client,
}

/// Normalizes a store URL to its scheme+host root with a trailing slash.
///
/// Given `"https://shop.example/collections/all"`, returns
/// `"https://shop.example/"`. All storefront paths are resolved against this
/// root regardless of what path the caller supplied.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidStoreUrl`] if `raw` does not parse as an
/// absolute URL or has no host (e.g. `mailto:` or `file:` URLs).
pub fn store_root(raw: &str) -> Result<Url, ScrapeError> {
    let parsed = Url::parse(raw).map_err(|e| ScrapeError::InvalidStoreUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    let origin = parsed.origin();
    if !origin.is_tuple() {
        return Err(ScrapeError::InvalidStoreUrl {
            url: raw.to_owned(),
            reason: "URL has no host".to_owned(),
        });
    }

    Url::parse(&format!("{}/", origin.ascii_serialization())).map_err(|e| {
        ScrapeError::InvalidStoreUrl {
            url: raw.to_owned(),
            reason: e.to_string(),
        }
    })
}

impl StorefrontClient {
    /// Creates a `StorefrontClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::NotFound`] — HTTP 404.
    /// - [`ScrapeError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScrapeError::Http`] — network or TLS failure.
    pub async fn get_text(&self, url: Url) -> Result<String, ScrapeError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches `url` and parses the response body as JSON.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_text`], plus [`ScrapeError::Deserialize`] when the
    /// body is not valid JSON.
    pub async fn get_json(&self, url: Url) -> Result<serde_json::Value, ScrapeError> {
        let context = url.to_string();
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| ScrapeError::Deserialize { context, source: e })
    }

    /// Resolves `path` against `base` and fetches the page body.
    ///
    /// # Errors
    ///
    /// [`ScrapeError::InvalidStoreUrl`] when the path cannot be resolved,
    /// otherwise the same errors as [`Self::get_text`].
    pub async fn fetch_page(&self, base: &Url, path: &str) -> Result<String, ScrapeError> {
        let url = base.join(path).map_err(|e| ScrapeError::InvalidStoreUrl {
            url: format!("{base}{path}"),
            reason: e.to_string(),
        })?;
        self.get_text(url).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
