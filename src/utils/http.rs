// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::StatusCode;
use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::CrawlerConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &CrawlerConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page asynchronously and parse it as HTML.
///
/// Anything other than `200 OK` is an error.
pub async fn fetch_page_async(client: &reqwest::Client, url: &str) -> Result<Html> {
    let response = client.get(url).send().await?;
    if response.status() != StatusCode::OK {
        return Err(AppError::status(url, response.status().as_u16()));
    }
    let text = response.text().await?;
    Ok(Html::parse_document(&text))
}

/// Page fetcher that reports failures instead of raising them.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a fetcher with its own client.
    pub fn from_config(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self::new(create_async_client(config)?))
    }

    /// Fetch and parse a page, or `None` after logging the failure.
    pub async fn fetch(&self, url: &str) -> Option<Html> {
        match fetch_page_async(&self.client, url).await {
            Ok(document) => Some(document),
            Err(AppError::Status { status, .. }) => {
                log::warn!("Failed to fetch {}: Status {}", url, status);
                None
            }
            Err(e) => {
                log::warn!("Error fetching {}: {}", url, e);
                None
            }
        }
    }
}
