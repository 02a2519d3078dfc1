// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Wiki location and link filtering
    #[serde(default)]
    pub wiki: WikiConfig,

    /// Dataset output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Corrections for known-broken wiki links
    #[serde(default = "defaults::url_fixes")]
    pub url_fixes: Vec<Replacement>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.max_concurrent == 0 {
            return Err(AppError::validation("crawler.max_concurrent must be > 0"));
        }
        if self.crawler.progress_interval == 0 {
            return Err(AppError::validation(
                "crawler.progress_interval must be > 0",
            ));
        }
        url::Url::parse(&self.wiki.base_url)?;
        if !self.wiki.category_path.starts_with('/') {
            return Err(AppError::validation(
                "wiki.category_path must start with '/'",
            ));
        }
        if self.wiki.title_markers.iter().all(|m| m.is_empty()) {
            return Err(AppError::validation("No title markers defined"));
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(AppError::validation("output.path is empty"));
        }
        if let Some(fix) = self.url_fixes.iter().find(|r| r.from.is_empty()) {
            return Err(AppError::validation(format!(
                "url_fixes entry with empty 'from' (to = {})",
                fix.to
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            wiki: WikiConfig::default(),
            output: OutputConfig::default(),
            url_fixes: defaults::url_fixes(),
        }
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Number of card pages fetched in parallel
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Pause after each completed card in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// Log progress every N completed cards
    #[serde(default = "defaults::progress_interval")]
    pub progress_interval: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
            request_delay_ms: defaults::request_delay(),
            progress_interval: defaults::progress_interval(),
        }
    }
}

/// Where the wiki lives and which card links are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Scheme and host, without trailing slash
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Path of the card category index
    #[serde(default = "defaults::category_path")]
    pub category_path: String,

    /// A card link is kept if its title contains any of these
    #[serde(default = "defaults::title_markers")]
    pub title_markers: Vec<String>,
}

impl WikiConfig {
    /// Absolute URL of the category index page.
    pub fn category_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.category_path)
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            category_path: defaults::category_path(),
            title_markers: defaults::title_markers(),
        }
    }
}

/// Dataset output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON file the card array is written to
    #[serde(default = "defaults::output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::output_path(),
        }
    }
}

/// A text replacement rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    use super::Replacement;

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
            .into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        10
    }
    pub fn request_delay() -> u64 {
        0
    }
    pub fn progress_interval() -> usize {
        10
    }

    // Wiki defaults
    pub fn base_url() -> String {
        "https://ichu.fandom.com".into()
    }
    pub fn category_path() -> String {
        "/wiki/Category:Cards".into()
    }
    pub fn title_markers() -> Vec<String> {
        vec!["LE".into(), "GR".into()]
    }

    // Output defaults
    pub fn output_path() -> PathBuf {
        PathBuf::from("src/data/ichu_cards.json")
    }

    // Pages renamed on the wiki whose old links are still listed
    pub fn url_fixes() -> Vec<Replacement> {
        vec![
            Replacement::new(
                "/wiki/(Chinese_Zodiac_Scout)_Li_Chaoyang_LE/G",
                "/wiki/(Chinese_Zodiac_Scout)_Li_Chaoyang_LE/GR",
            ),
            Replacement::new(
                "/wiki/(Kirameki_%E2%98%86_Sweet_Surprise)_Orihiro_Ryugu_N/HN",
                "/wiki/(Kirameki_☆_Sweet_Surprise)_Tatsuomi_Ryugu_N/HN",
            ),
            Replacement::new(
                "/wiki/(Kirameki_☆_Sweet_Surprise)_Orihiro_Ryugu_N/HN",
                "/wiki/(Kirameki_☆_Sweet_Surprise)_Tatsuomi_Ryugu_N/HN",
            ),
            Replacement::new(
                "/wiki/(fleur)_Kokoro_Hanabusa_LE/GR",
                "/wiki/(fleur)_Kokoro_Hanabusa_GR",
            ),
            Replacement::new(
                "/wiki/(3rd_Anniversary_Scout)_Akio_Kusakabe_LE/GR",
                "/wiki/(3rd_Anniversary_Scout)_Akio_Tobikura_LE/GR",
            ),
            Replacement::new(
                "/wiki/(2018_I-Chu_Awards_Blanc)_Seya_Aido_GR",
                "/wiki/(2018_I-Chu_Awards_Blanc)_Seiya_Aido_GR",
            ),
            Replacement::new(
                "/wiki/(Best_Album_Ai_Version)_Chu_Version)_Kuro_Yakaku_GR",
                "/wiki/(Best_Album_Chu_Version)_Kuro_Yakaku_GR",
            ),
        ]
    }
}
