// src/pipeline/validate.rs

use std::path::Path;

use crate::error::Result;
use crate::models::Config;
use crate::services::{CardExtractor, ListingSelectors};
use crate::utils::report;

/// Validate the configuration and the built-in selectors and patterns.
pub fn run_validate(config: &Config, config_path: &Path) -> Result<()> {
    report::header("Validating configuration");
    log::info!("Config file: {}", config_path.display());

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }
    log::info!("✓ Config OK");
    report::sub_item(&format!("User agent: {}", config.crawler.user_agent));
    report::sub_item(&format!("Timeout: {}s", config.crawler.timeout_secs));
    report::sub_item(&format!(
        "Max concurrent: {}",
        config.crawler.max_concurrent
    ));
    report::sub_item(&format!("Category: {}", config.wiki.category_url()));
    report::sub_item(&format!(
        "Title markers: {}",
        config.wiki.title_markers.join(", ")
    ));
    report::sub_item(&format!("URL fixes: {}", config.url_fixes.len()));
    report::sub_item(&format!("Output: {}", config.output.path.display()));

    ListingSelectors::new()?;
    CardExtractor::new()?;
    log::info!("✓ Selectors and patterns OK");

    log::info!("All validations passed!");
    Ok(())
}
