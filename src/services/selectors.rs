// src/services/selectors.rs

//! CSS selectors for the wiki's page markup.
//!
//! Compiled once per crawl and shared by the link collector and the card
//! extractor.

use scraper::Selector;

use crate::error::{AppError, Result};

/// Parse a CSS selector, mapping failures to `AppError::Selector`.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Selectors for category and range listing pages.
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    pub category_member: Selector,
    pub range_link: Selector,
}

impl ListingSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            category_member: parse_selector(".category-page__member-link")?,
            range_link: parse_selector("table.article-table td a")?,
        })
    }
}

/// Selectors for individual card pages.
#[derive(Debug, Clone)]
pub struct CardSelectors {
    // Name
    pub page_title: Selector,
    pub first_heading: Selector,

    // Images
    pub tabber: Selector,
    pub legacy_tab: Selector,
    pub paired_header: Selector,
    pub paired_content: Selector,
    pub img: Selector,
    pub image_link: Selector,
    pub infobox_thumbnail: Selector,
    pub infobox_img: Selector,

    // Skills
    pub article_table: Selector,
    pub skill_header_row: Selector,

    // Stats
    pub table: Selector,
    pub row: Selector,
    pub cell: Selector,
    pub wild_icon: Selector,
}

impl CardSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            page_title: parse_selector(".page-header__title")?,
            first_heading: parse_selector("#firstHeading")?,

            tabber: parse_selector(".tabber")?,
            legacy_tab: parse_selector(".tabbertab")?,
            paired_header: parse_selector(".wds-tabs__tab")?,
            paired_content: parse_selector(".wds-tab__content")?,
            img: parse_selector("img")?,
            image_link: parse_selector("a.image")?,
            infobox_thumbnail: parse_selector(".pi-image-thumbnail")?,
            infobox_img: parse_selector(".infobox img")?,

            article_table: parse_selector("table.article")?,
            skill_header_row: parse_selector("tr.article-table")?,

            table: parse_selector("table")?,
            row: parse_selector("tr")?,
            cell: parse_selector("td, th")?,
            wild_icon: parse_selector(r#"img[data-image-key*="Wild"]"#)?,
        })
    }
}
