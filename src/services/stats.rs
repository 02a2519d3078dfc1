// src/services/stats.rs

//! Stat table extraction.
//!
//! The stat table is read row by row. Rows naming a section (`Unidolized`,
//! `Idolized`) or a label (`Initial`, `Max Lv`, `Etoile`) update the current
//! position; a row holding three stat numbers is written to that position.

use regex::Regex;
use scraper::{ElementRef, Html};

use super::selectors::CardSelectors;
use crate::error::Result;
use crate::models::{Section, StatBlock, StatIcons, StatLabel, StatLine};
use crate::utils::html::image_src;

/// Integers, plain or with comma thousands separators.
const NUMBER_PATTERN: &str = r"\d{1,3}(?:,\d{3})+|\d+";

/// Stat numbers are at least this many digits; smaller ones are bonuses.
const MIN_STAT_DIGITS: usize = 3;

/// Stat values and icons of one card page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStats {
    pub stats: StatBlock,
    pub icons: StatIcons,
}

/// Reads the Wild/Pop/Cool stat table of a card page.
#[derive(Debug, Clone)]
pub struct StatExtractor {
    number: Regex,
}

impl StatExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            number: Regex::new(NUMBER_PATTERN)?,
        })
    }

    /// Extract stats and icons; both stay empty if no stat table is found.
    pub fn extract(&self, document: &Html, selectors: &CardSelectors) -> CardStats {
        let Some(table) = find_stat_table(document, selectors) else {
            log::debug!("No stat table found");
            return CardStats::default();
        };

        CardStats {
            stats: self.read_rows(table, selectors),
            icons: read_icons(table, selectors),
        }
    }

    fn read_rows(&self, table: ElementRef, selectors: &CardSelectors) -> StatBlock {
        let mut stats = StatBlock::default();
        let mut cursor = RowCursor::default();

        for row in table.select(&selectors.row) {
            let text: String = row.text().collect();
            cursor.observe(text.trim());

            let values = self.row_values(row, selectors);
            if values.len() < 3 {
                continue;
            }
            let Some(label) = cursor.label.take() else {
                continue;
            };

            let [wild, pop, cool] = &values[values.len() - 3..] else {
                continue;
            };
            // An etoile row outside the idolized section has no slot
            if let Some(slot) = stats.slot_mut(cursor.section, label) {
                *slot = StatLine::new(wild.as_str(), pop.as_str(), cool.as_str());
            }
        }

        stats
    }

    /// Stat-sized numbers in the row's cells, separators stripped.
    fn row_values(&self, row: ElementRef, selectors: &CardSelectors) -> Vec<String> {
        row.select(&selectors.cell)
            .flat_map(|cell| {
                let text: String = cell.text().collect();
                self.number
                    .find_iter(text.trim())
                    .map(|m| m.as_str().replace(',', ""))
                    .filter(|digits| digits.len() >= MIN_STAT_DIGITS)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// Section and pending label while walking the stat table.
#[derive(Debug, Clone, Copy)]
struct RowCursor {
    section: Section,
    label: Option<StatLabel>,
}

impl Default for RowCursor {
    fn default() -> Self {
        Self {
            section: Section::Unidolized,
            label: None,
        }
    }
}

impl RowCursor {
    /// Update position from a row's text. Section changes keep the label.
    fn observe(&mut self, text: &str) {
        if text.contains("Un-idolized") || text.contains("Unidolized") {
            self.section = Section::Unidolized;
        }
        if text.contains("Idolized") && !text.contains("Un-idolized") {
            self.section = Section::Idolized;
        }

        if text.contains("Initial") {
            self.label = Some(StatLabel::Initial);
        } else if text.contains("Max Lv") {
            self.label = Some(StatLabel::MaxLevel);
        } else if text.contains("Etoile") {
            self.label = Some(StatLabel::Etoile);
        }
    }
}

/// First table with the Wild icon that mentions `Initial`, else `Max Lv.`.
fn find_stat_table<'a>(document: &'a Html, selectors: &CardSelectors) -> Option<ElementRef<'a>> {
    let candidate = |marker: &str| {
        document.select(&selectors.table).find(|table| {
            table.text().collect::<String>().contains(marker)
                && table.select(&selectors.wild_icon).next().is_some()
        })
    };
    candidate("Initial").or_else(|| candidate("Max Lv."))
}

fn read_icons(table: ElementRef, selectors: &CardSelectors) -> StatIcons {
    let mut icons = StatIcons::default();
    for img in table.select(&selectors.img) {
        let key = img
            .value()
            .attr("data-image-key")
            .unwrap_or("")
            .to_lowercase();
        let slot = if key.contains("wild") {
            &mut icons.wild
        } else if key.contains("pop") {
            &mut icons.pop
        } else if key.contains("cool") {
            &mut icons.cool
        } else {
            continue;
        };
        *slot = image_src(&img);
    }
    icons
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON_HEADER: &str = r#"<tr>
        <th></th>
        <th><img data-image-key="Wild_Icon.png" data-src="https://img/wild.png/revision/latest"></th>
        <th><img data-image-key="Pop_Icon.png" src="https://img/pop.png"></th>
        <th><img data-image-key="COOL_Icon.png" src="https://img/cool.png"></th>
    </tr>"#;

    fn extract(rows: &str) -> CardStats {
        let html = format!("<table>{ICON_HEADER}{rows}</table>");
        let document = Html::parse_document(&html);
        StatExtractor::new()
            .unwrap()
            .extract(&document, &CardSelectors::new().unwrap())
    }

    #[test]
    fn test_implicit_unidolized_section() {
        let result = extract(
            r#"<tr><th>Initial</th><td>3,201</td><td>2,950</td><td>3,010</td></tr>
               <tr><th>Max Lv.</th><td>8,201</td><td>7,950</td><td>8,010</td></tr>"#,
        );

        assert_eq!(
            result.stats.unidolized.initial,
            StatLine::new("3201", "2950", "3010")
        );
        assert_eq!(
            result.stats.unidolized.max_lv,
            StatLine::new("8201", "7950", "8010")
        );
        assert!(result.stats.idolized.initial.is_empty());
        assert!(result.stats.idolized.max_lv.is_empty());
        assert!(result.stats.idolized.etoile.is_empty());
    }

    #[test]
    fn test_last_three_tokens_and_label_reset() {
        let result = extract(
            r#"<tr><th>Initial</th><td>1,234</td><td>987</td><td>5,000 (+5)</td></tr>
               <tr><td>4,444</td><td>5,555</td><td>6,666</td></tr>"#,
        );
        assert_eq!(
            result.stats.unidolized.initial,
            StatLine::new("1234", "987", "5000")
        );
        // The unlabeled row after a written row is not applied anywhere
        assert!(result.stats.unidolized.max_lv.is_empty());
        assert!(result.stats.idolized.initial.is_empty());
    }

    #[test]
    fn test_rows_with_fewer_than_three_values_are_skipped() {
        let result = extract(
            r#"<tr><th>Initial</th><td>3,201</td><td>2,950</td><td>+5</td></tr>
               <tr><th>Max Lv.</th><td>8,201</td><td>7,950</td><td>8,010</td></tr>"#,
        );
        assert!(result.stats.unidolized.initial.is_empty());
        assert_eq!(
            result.stats.unidolized.max_lv,
            StatLine::new("8201", "7950", "8010")
        );
    }

    #[test]
    fn test_label_carries_to_following_number_row() {
        let result = extract(
            r#"<tr><th colspan="4">Idolized</th></tr>
               <tr><th colspan="4">Max Lv.</th></tr>
               <tr><td></td><td>9,100</td><td>9,200</td><td>9,300</td></tr>"#,
        );
        assert_eq!(
            result.stats.idolized.max_lv,
            StatLine::new("9100", "9200", "9300")
        );
    }

    #[test]
    fn test_sections_and_etoile() {
        let result = extract(
            r#"<tr><th colspan="4">Un-idolized</th></tr>
               <tr><th>Etoile +5</th><td>1,111</td><td>2,222</td><td>3,333</td></tr>
               <tr><th colspan="4">Idolized</th></tr>
               <tr><th>Initial</th><td>4,100</td><td>4,200</td><td>4,300</td></tr>
               <tr><th>Etoile +5</th><td>10,100</td><td>10,200</td><td>10,300</td></tr>"#,
        );
        assert!(result.stats.unidolized.initial.is_empty());
        assert_eq!(
            result.stats.idolized.initial,
            StatLine::new("4100", "4200", "4300")
        );
        assert_eq!(
            result.stats.idolized.etoile,
            StatLine::new("10100", "10200", "10300")
        );
    }

    #[test]
    fn test_unidolized_wins_when_both_names_appear() {
        let mut cursor = RowCursor::default();
        cursor.observe("Idolized");
        assert_eq!(cursor.section, Section::Idolized);
        cursor.observe("Un-idolized vs Idolized");
        assert_eq!(cursor.section, Section::Unidolized);
    }

    #[test]
    fn test_first_label_in_row_wins() {
        let mut cursor = RowCursor::default();
        cursor.observe("Max Lv. (Etoile)");
        assert_eq!(cursor.label, Some(StatLabel::MaxLevel));
        cursor.observe("Initial / Max Lv.");
        assert_eq!(cursor.label, Some(StatLabel::Initial));
        cursor.observe("Etoile");
        assert_eq!(cursor.label, Some(StatLabel::Etoile));
    }

    #[test]
    fn test_plain_large_numbers_stay_whole() {
        let result = extract(
            r#"<tr><th>Initial</th><td>12345</td><td>23456</td><td>34567</td></tr>"#,
        );
        assert_eq!(
            result.stats.unidolized.initial,
            StatLine::new("12345", "23456", "34567")
        );
    }

    #[test]
    fn test_icons() {
        let result = extract(r#"<tr><th>Initial</th><td>-</td></tr>"#);
        assert_eq!(result.icons.wild.as_deref(), Some("https://img/wild.png"));
        assert_eq!(result.icons.pop.as_deref(), Some("https://img/pop.png"));
        assert_eq!(result.icons.cool.as_deref(), Some("https://img/cool.png"));
    }

    #[test]
    fn test_no_stat_table() {
        let document = Html::parse_document(
            "<table><tr><th>Initial</th><td>1,000</td><td>2,000</td><td>3,000</td></tr></table>",
        );
        let result = StatExtractor::new()
            .unwrap()
            .extract(&document, &CardSelectors::new().unwrap());
        assert_eq!(result, CardStats::default());
    }

    #[test]
    fn test_max_lv_fallback_table() {
        let document = Html::parse_document(&format!(
            r#"<table><tr><td>Initial notes</td></tr></table>
               <table>{ICON_HEADER}
                 <tr><th>Max Lv.</th><td>8,201</td><td>7,950</td><td>8,010</td></tr>
               </table>"#
        ));
        let result = StatExtractor::new()
            .unwrap()
            .extract(&document, &CardSelectors::new().unwrap());
        assert_eq!(
            result.stats.unidolized.max_lv,
            StatLine::new("8201", "7950", "8010")
        );
    }
}
