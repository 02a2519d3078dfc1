// src/models/url_fixes.rs

//! Lookup table for wiki links that point at renamed pages.

use std::collections::HashMap;

use super::config::Replacement;

/// Immutable exact-match href correction table.
#[derive(Debug, Clone, Default)]
pub struct UrlFixes {
    table: HashMap<String, String>,
}

impl UrlFixes {
    /// Build the table from configured replacement rules.
    ///
    /// A later rule with the same `from` overrides an earlier one.
    pub fn new(rules: &[Replacement]) -> Self {
        let table = rules
            .iter()
            .map(|r| (r.from.clone(), r.to.clone()))
            .collect();
        Self { table }
    }

    /// Corrected href, or the input unchanged when no rule matches.
    pub fn apply<'a>(&'a self, href: &'a str) -> &'a str {
        match self.table.get(href) {
            Some(fixed) => {
                log::info!("Fixing URL: {} -> {}", href, fixed);
                fixed.as_str()
            }
            None => href,
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Config;

    fn default_fixes() -> UrlFixes {
        UrlFixes::new(&Config::default().url_fixes)
    }

    #[test]
    fn test_known_broken_link_is_rewritten() {
        let fixes = default_fixes();
        assert_eq!(
            fixes.apply("/wiki/(Chinese_Zodiac_Scout)_Li_Chaoyang_LE/G"),
            "/wiki/(Chinese_Zodiac_Scout)_Li_Chaoyang_LE/GR"
        );
        assert_eq!(
            fixes.apply("/wiki/(Best_Album_Ai_Version)_Chu_Version)_Kuro_Yakaku_GR"),
            "/wiki/(Best_Album_Chu_Version)_Kuro_Yakaku_GR"
        );
    }

    #[test]
    fn test_encoded_and_literal_star_map_to_same_page() {
        let fixes = default_fixes();
        let encoded = fixes.apply("/wiki/(Kirameki_%E2%98%86_Sweet_Surprise)_Orihiro_Ryugu_N/HN");
        let literal = fixes.apply("/wiki/(Kirameki_☆_Sweet_Surprise)_Orihiro_Ryugu_N/HN");
        assert_eq!(encoded, literal);
        assert_eq!(literal, "/wiki/(Kirameki_☆_Sweet_Surprise)_Tatsuomi_Ryugu_N/HN");
    }

    #[test]
    fn test_exact_match_only() {
        let fixes = default_fixes();
        let prefixed = "/wiki/(Chinese_Zodiac_Scout)_Li_Chaoyang_LE/GR";
        assert_eq!(fixes.apply(prefixed), prefixed);
        assert_eq!(fixes.apply("/wiki/Anything_Else_GR"), "/wiki/Anything_Else_GR");
    }

    #[test]
    fn test_table_size() {
        assert_eq!(default_fixes().len(), 7);
        assert!(UrlFixes::default().is_empty());
    }
}
