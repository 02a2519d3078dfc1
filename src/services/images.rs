// src/services/images.rs

//! Card artwork extraction.
//!
//! Card pages show their artwork in tab containers. Two markup styles exist
//! on the wiki, each handled by a [`TabStrategy`]. A strategy that does not
//! recognise a container yields no panels, so every strategy runs on every
//! container.

use scraper::{ElementRef, Html};

use super::selectors::CardSelectors;
use crate::models::ImageSet;
use crate::utils::html::{attr_trimmed, element_text, image_src};
use crate::utils::url::strip_revision;

/// Extracts labeled tab panels from one tab container.
pub trait TabStrategy: Send + Sync {
    /// Short name used in debug logs.
    fn name(&self) -> &'static str;

    /// `(label, panel)` pairs in document order.
    fn panels<'a>(
        &self,
        container: ElementRef<'a>,
        selectors: &CardSelectors,
    ) -> Vec<(String, ElementRef<'a>)>;
}

/// `.tabbertab` panels labeled by their `title` attribute.
pub struct LegacyTabs;

impl TabStrategy for LegacyTabs {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn panels<'a>(
        &self,
        container: ElementRef<'a>,
        selectors: &CardSelectors,
    ) -> Vec<(String, ElementRef<'a>)> {
        container
            .select(&selectors.legacy_tab)
            .map(|tab| (attr_trimmed(&tab, "title").to_string(), tab))
            .collect()
    }
}

/// `.wds-tabs__tab` headers zipped with `.wds-tab__content` panels.
///
/// Only used when header and panel counts agree.
pub struct PairedTabs;

impl TabStrategy for PairedTabs {
    fn name(&self) -> &'static str {
        "paired"
    }

    fn panels<'a>(
        &self,
        container: ElementRef<'a>,
        selectors: &CardSelectors,
    ) -> Vec<(String, ElementRef<'a>)> {
        let headers: Vec<_> = container.select(&selectors.paired_header).collect();
        let contents: Vec<_> = container.select(&selectors.paired_content).collect();
        if headers.len() != contents.len() {
            log::debug!(
                "Skipping paired tabs: {} headers, {} panels",
                headers.len(),
                contents.len()
            );
            return Vec::new();
        }

        headers
            .into_iter()
            .zip(contents)
            .map(|(header, content)| {
                let hash = attr_trimmed(&header, "data-hash");
                let label = if hash.is_empty() {
                    element_text(&header)
                } else {
                    hash.to_string()
                };
                (label, content)
            })
            .collect()
    }
}

static STRATEGIES: [&dyn TabStrategy; 2] = [&LegacyTabs, &PairedTabs];

/// Collect the artwork of a card page.
pub fn extract_images(document: &Html, selectors: &CardSelectors) -> ImageSet {
    let mut images = ImageSet::default();

    for container in document.select(&selectors.tabber) {
        for strategy in STRATEGIES {
            for (label, panel) in strategy.panels(container, selectors) {
                if let Some(url) = panel_image(panel, selectors) {
                    log::debug!("{} tab '{}': {}", strategy.name(), label, url);
                    classify(&mut images, &label, url);
                }
            }
        }
    }

    if images.is_empty() {
        images.main = document
            .select(&selectors.infobox_thumbnail)
            .next()
            .or_else(|| document.select(&selectors.infobox_img).next())
            .and_then(|img| image_src(&img));
    }

    images
}

/// Image URL shown in a tab panel.
///
/// The first `img` wins over the first `a.image` link. File description
/// pages are not images.
fn panel_image(panel: ElementRef, selectors: &CardSelectors) -> Option<String> {
    let src = panel
        .select(&selectors.img)
        .next()
        .and_then(|img| image_src(&img))
        .or_else(|| {
            panel
                .select(&selectors.image_link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .filter(|href| !href.is_empty())
                .map(str::to_string)
        })?;

    if src.contains("/wiki/File:") {
        return None;
    }
    Some(strip_revision(&src).to_string())
}

/// Store an image under the variant its tab label names.
///
/// Matching is case-sensitive. `In-Game` art only fills an empty unidolized
/// slot.
pub fn classify(images: &mut ImageSet, label: &str, url: String) {
    if label.contains("Unidolized") || label.contains("Un-idolized") {
        images.unidolized = Some(url);
    } else if label.contains("Idolized") {
        images.idolized = Some(url);
    } else if label.contains("In-Game") && images.unidolized.is_none() {
        images.unidolized = Some(url);
    }
}
