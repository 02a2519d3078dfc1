// src/services/cards.rs

//! Card page scraping service.
//!
//! Turns one card page into a [`CardRecord`]. Missing page sections leave the
//! matching fields at their defaults; only a failed fetch drops the card.

use scraper::Html;

use super::images::extract_images;
use super::selectors::CardSelectors;
use super::skills::extract_skills;
use super::stats::StatExtractor;
use crate::error::Result;
use crate::models::CardRecord;
use crate::utils::html::element_text;
use crate::utils::http::Fetcher;

/// Name used when a page has no title.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Pure HTML-to-record extraction.
#[derive(Debug, Clone)]
pub struct CardExtractor {
    selectors: CardSelectors,
    stats: StatExtractor,
}

impl CardExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: CardSelectors::new()?,
            stats: StatExtractor::new()?,
        })
    }

    /// Build the record for a parsed card page.
    pub fn extract(&self, url: &str, document: &Html) -> CardRecord {
        let name = self.extract_name(document);
        log::debug!("Parsing: {}", name);

        let mut card = CardRecord::new(url, name);
        card.images = extract_images(document, &self.selectors);

        let skills = extract_skills(document, &self.selectors);
        card.skill = skills.skill;
        card.leader_skill = skills.leader_skill;

        let stats = self.stats.extract(document, &self.selectors);
        card.stats = stats.stats;
        card.stat_icons = stats.icons;

        card
    }

    fn extract_name(&self, document: &Html) -> String {
        [&self.selectors.page_title, &self.selectors.first_heading]
            .into_iter()
            .flat_map(|selector| document.select(selector))
            .map(|element| element_text(&element))
            .find(|text| !text.is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }
}

/// Fetches card pages and extracts their records.
#[derive(Clone)]
pub struct CardService {
    fetcher: Fetcher,
    extractor: CardExtractor,
}

impl CardService {
    pub fn new(fetcher: Fetcher, extractor: CardExtractor) -> Self {
        Self { fetcher, extractor }
    }

    /// Scrape one card page; `None` if the page could not be fetched.
    pub async fn scrape(&self, url: &str) -> Option<CardRecord> {
        let document = self.fetcher.fetch(url).await?;
        Some(self.extractor.extract(url, &document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatLine;

    const CARD_PAGE: &str = r#"<html><body>
        <h1 class="page-header__title"> (fleur) Kokoro Hanabusa GR </h1>
        <div class="tabber">
          <div class="tabbertab" title="Unidolized"><img src="https://img/u.png"></div>
          <div class="tabbertab" title="Idolized"><img src="https://img/i.png"></div>
        </div>
        <table class="article">
          <tr class="article-table"><th>Petal Waltz</th></tr>
          <tr><td>Boosts score by 20%</td></tr>
          <tr class="article-table"><th>Bloom</th></tr>
          <tr><td>Leader: Pop members +8%</td></tr>
        </table>
        <table>
          <tr><th></th><th><img data-image-key="Wild.png" src="https://img/wild.png"></th></tr>
          <tr><th>Initial</th><td>3,201</td><td>2,950</td><td>3,010</td></tr>
        </table>
    </body></html>"#;

    #[test]
    fn test_extract_full_card() {
        let extractor = CardExtractor::new().unwrap();
        let document = Html::parse_document(CARD_PAGE);
        let card = extractor.extract("https://ichu.fandom.com/wiki/X_GR", &document);

        assert_eq!(card.url, "https://ichu.fandom.com/wiki/X_GR");
        assert_eq!(card.name, "(fleur) Kokoro Hanabusa GR");
        assert_eq!(card.images.unidolized.as_deref(), Some("https://img/u.png"));
        assert_eq!(card.images.idolized.as_deref(), Some("https://img/i.png"));
        assert_eq!(card.skill.name.as_deref(), Some("Petal Waltz"));
        assert_eq!(card.leader_skill.name.as_deref(), Some("Bloom"));
        assert_eq!(
            card.stats.unidolized.initial,
            StatLine::new("3201", "2950", "3010")
        );
        assert_eq!(card.stat_icons.wild.as_deref(), Some("https://img/wild.png"));
        assert_eq!(card.stat_icons.pop, None);
    }

    #[test]
    fn test_name_falls_back_to_first_heading() {
        let extractor = CardExtractor::new().unwrap();
        let document = Html::parse_document(
            r#"<h1 class="page-header__title">  </h1><h1 id="firstHeading">Seiya Aido GR</h1>"#,
        );
        assert_eq!(extractor.extract("u", &document).name, "Seiya Aido GR");
    }

    #[test]
    fn test_empty_page_still_yields_record() {
        let extractor = CardExtractor::new().unwrap();
        let document = Html::parse_document("<html><body></body></html>");
        let card = extractor.extract("https://ichu.fandom.com/wiki/Empty", &document);

        assert_eq!(card.name, UNKNOWN_NAME);
        assert!(card.images.is_empty());
        assert!(card.stats.is_empty());
        assert_eq!(card, CardRecord::new("https://ichu.fandom.com/wiki/Empty", "Unknown"));
    }
}
