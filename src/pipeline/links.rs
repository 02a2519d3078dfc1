// src/pipeline/links.rs

//! Link discovery without scraping.

use crate::error::Result;
use crate::models::{Config, UrlFixes};
use crate::services::LinkCollector;
use crate::utils::http::Fetcher;
use crate::utils::report;

/// Discover card links and return them in first-seen order.
pub async fn run_links(config: &Config) -> Result<Vec<String>> {
    report::header("I-Chu card links");

    let fetcher = Fetcher::from_config(&config.crawler)?;
    let collector = LinkCollector::new(fetcher, &config.wiki, UrlFixes::new(&config.url_fixes))?;
    Ok(collector.discover().await)
}
