// src/utils/html.rs

//! Small helpers over `scraper` element references.

use scraper::ElementRef;

use super::url::strip_revision;

/// Concatenated, trimmed text content of an element.
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed value of an attribute, or an empty string.
pub fn attr_trimmed<'a>(element: &ElementRef<'a>, name: &str) -> &'a str {
    element.value().attr(name).map(str::trim).unwrap_or("")
}

/// Image URL of an `img` element.
///
/// Prefers the lazy-load `data-src` over `src`; the `/revision` suffix is
/// removed.
pub fn image_src(img: &ElementRef) -> Option<String> {
    let value = img.value();
    value
        .attr("data-src")
        .filter(|s| !s.is_empty())
        .or_else(|| value.attr("src").filter(|s| !s.is_empty()))
        .map(|src| strip_revision(src).to_string())
}
