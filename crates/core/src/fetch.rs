//! Article page fetching over HTTP(S).

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::extract::extract_article_text;
use crate::{Result, SentimetricError};

/// HTTP client configuration for fetching article pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 10, user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string() }
    }
}

/// Fetches a page and returns its body as text.
///
/// Only absolute `http`/`https` URLs are accepted. Redirects are followed and
/// any final status outside 2xx is an error.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| SentimetricError::InvalidUrl(format!("{url}: {e}")))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(SentimetricError::InvalidUrl(format!("{url}: scheme must be http or https")));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(SentimetricError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() { SentimetricError::Timeout { timeout: config.timeout } } else { SentimetricError::HttpError(e) }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SentimetricError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    let content = response.text().await.map_err(|e| {
        if e.is_timeout() { SentimetricError::Timeout { timeout: config.timeout } } else { SentimetricError::HttpError(e) }
    })?;
    debug!("Fetched {} bytes from {url}", content.len());

    Ok(content)
}

/// Fetches a page and extracts its main article text.
///
/// Never fails: any fetch error is logged and yields an empty string, which
/// analyzes to an all-zero record.
pub async fn scrape_article(url: &str, config: &FetchConfig) -> String {
    match fetch_url(url, config).await {
        Ok(html) => extract_article_text(&html),
        Err(e) => {
            warn!("Error scraping {url}: {e}");
            String::new()
        }
    }
}
