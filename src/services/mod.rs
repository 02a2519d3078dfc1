//! Service layer for the crawler application.
//!
//! This module contains the business logic for:
//! - Card link discovery (`LinkCollector`)
//! - Card page extraction (`CardExtractor`, `CardService`)
//! - Image, skill and stat parsing used by the extractor

mod cards;
mod images;
mod links;
mod selectors;
mod skills;
mod stats;

pub use cards::{CardExtractor, CardService, UNKNOWN_NAME};
pub use images::{LegacyTabs, PairedTabs, TabStrategy, extract_images};
pub use links::{LinkCollector, LinkFilter, LinkSet, extract_card_links, extract_range_pages};
pub use selectors::{CardSelectors, ListingSelectors, parse_selector};
pub use skills::{CardSkills, extract_skills};
pub use stats::{CardStats, StatExtractor};
