// src/models/mod.rs

//! Domain models for the crawler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod card;
mod config;
mod url_fixes;

use chrono::{DateTime, Utc};

// Re-export all public types
pub use card::{
    CardRecord, IdolizedStats, ImageSet, Section, SkillEntry, StatBlock, StatIcons, StatLabel,
    StatLine, UnidolizedStats,
};
pub use config::{Config, CrawlerConfig, OutputConfig, Replacement, WikiConfig};
pub use url_fixes::UrlFixes;

/// Result of scraping every discovered card page.
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    pub cards: Vec<CardRecord>,
    pub link_total: usize,
    pub failures: usize,
}

/// Statistics about a crawl run.
#[derive(Debug, Clone)]
pub struct CrawlStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub link_count: usize,
    pub card_count: usize,
    pub failure_count: usize,
}

impl CrawlStats {
    pub fn new(start_time: DateTime<Utc>, outcome: &CrawlOutcome) -> Self {
        Self {
            start_time,
            end_time: Utc::now(),
            link_count: outcome.link_total,
            card_count: outcome.cards.len(),
            failure_count: outcome.failures,
        }
    }

    /// Wall-clock duration in seconds.
    pub fn elapsed_secs(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }

    /// Fraction of discovered links that produced a card.
    pub fn success_rate(&self) -> f64 {
        if self.link_count == 0 {
            1.0
        } else {
            self.card_count as f64 / self.link_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let outcome = CrawlOutcome {
            cards: vec![CardRecord::new("a", "A"), CardRecord::new("b", "B")],
            link_total: 4,
            failures: 2,
        };
        let stats = CrawlStats::new(Utc::now(), &outcome);
        assert_eq!(stats.card_count, 2);
        assert!((stats.success_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_success_rate_without_links() {
        let stats = CrawlStats::new(Utc::now(), &CrawlOutcome::default());
        assert!((stats.success_rate() - 1.0).abs() < f64::EPSILON);
        assert!(stats.elapsed_secs() >= 0);
    }
}
