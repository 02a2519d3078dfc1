// src/services/links.rs

//! Card link discovery.
//!
//! Walks the card category: the category index lists range pages, and each
//! range page lists card pages in `article-table` tables.

use std::collections::HashSet;

use scraper::Html;

use super::selectors::ListingSelectors;
use crate::error::Result;
use crate::models::{UrlFixes, WikiConfig};
use crate::utils::http::Fetcher;
use crate::utils::url::{join_path, resolve};

/// Ordered set of card URLs, deduplicated by exact string.
#[derive(Debug, Default)]
pub struct LinkSet {
    links: Vec<String>,
    seen: HashSet<String>,
}

impl LinkSet {
    /// Insert a URL; returns `false` if it was already present.
    pub fn insert(&mut self, url: String) -> bool {
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.links.push(url);
        true
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// URLs in first-seen order.
    pub fn into_vec(self) -> Vec<String> {
        self.links
    }
}

/// Rules deciding which range page anchors are card links.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    base_url: String,
    title_markers: Vec<String>,
    fixes: UrlFixes,
}

impl LinkFilter {
    pub fn new(wiki: &WikiConfig, fixes: UrlFixes) -> Self {
        Self {
            base_url: wiki.base_url.clone(),
            title_markers: wiki
                .title_markers
                .iter()
                .filter(|m| !m.is_empty())
                .cloned()
                .collect(),
            fixes,
        }
    }

    /// Absolute card URL for an anchor, or `None` if it is not a card link.
    ///
    /// File and edit links are dropped before the correction table is
    /// applied; absolute hrefs are dropped after it.
    pub fn accept(&self, href: &str, title: &str) -> Option<String> {
        if href.is_empty() || href.contains("/wiki/File:") || href.contains("action=edit") {
            return None;
        }

        let href = self.fixes.apply(href);
        if href.starts_with("http") {
            return None;
        }

        if !self.title_markers.iter().any(|m| title.contains(m.as_str())) {
            return None;
        }

        Some(join_path(&self.base_url, href))
    }
}

/// Range page URLs listed on the category index.
pub fn extract_range_pages(
    document: &Html,
    selectors: &ListingSelectors,
    base_url: &str,
) -> Vec<String> {
    document
        .select(&selectors.category_member)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| !href.is_empty() && !href.contains("Category:"))
        .map(|href| resolve(base_url, href))
        .collect()
}

/// Add the card links of one range page to `links`.
///
/// Returns the number of new links.
pub fn extract_card_links(
    document: &Html,
    selectors: &ListingSelectors,
    filter: &LinkFilter,
    links: &mut LinkSet,
) -> usize {
    document
        .select(&selectors.range_link)
        .filter_map(|a| {
            let value = a.value();
            let href = value.attr("href")?;
            filter.accept(href, value.attr("title").unwrap_or(""))
        })
        .filter(|url| links.insert(url.clone()))
        .count()
}

/// Discovers card page URLs on the wiki.
pub struct LinkCollector {
    fetcher: Fetcher,
    selectors: ListingSelectors,
    filter: LinkFilter,
    category_url: String,
    base_url: String,
}

impl LinkCollector {
    pub fn new(fetcher: Fetcher, wiki: &WikiConfig, fixes: UrlFixes) -> Result<Self> {
        Ok(Self {
            fetcher,
            selectors: ListingSelectors::new()?,
            filter: LinkFilter::new(wiki, fixes),
            category_url: wiki.category_url(),
            base_url: wiki.base_url.clone(),
        })
    }

    /// Collect card URLs in first-seen order.
    ///
    /// An unreachable category index yields no links; unreachable range
    /// pages are skipped.
    pub async fn discover(&self) -> Vec<String> {
        log::info!("Fetching card list from: {}", self.category_url);
        let Some(index) = self.fetcher.fetch(&self.category_url).await else {
            return Vec::new();
        };
        let range_pages = extract_range_pages(&index, &self.selectors, &self.base_url);
        drop(index);

        log::info!(
            "Found {} range pages. Scanning for card links...",
            range_pages.len()
        );

        let mut links = LinkSet::default();
        for range_url in &range_pages {
            let Some(page) = self.fetcher.fetch(range_url).await else {
                continue;
            };
            let added = extract_card_links(&page, &self.selectors, &self.filter, &mut links);
            log::debug!("{}: {} new card links", range_url, added);
        }

        log::info!("Found {} cards total.", links.len());
        links.into_vec()
    }
}
