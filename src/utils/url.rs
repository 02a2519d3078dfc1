// src/utils/url.rs

//! URL manipulation utilities.
//!
//! Wiki hrefs are joined as plain strings so that a page's identity URL keeps
//! the exact characters the wiki served (`☆`, `%E2%98%86`, parentheses).

/// Join a site-absolute path onto a base URL.
///
/// # Examples
/// ```
/// use ichu_crawler::utils::url::join_path;
///
/// assert_eq!(
///     join_path("https://ichu.fandom.com/", "/wiki/Category:Cards"),
///     "https://ichu.fandom.com/wiki/Category:Cards"
/// );
/// ```
pub fn join_path(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Resolve a potentially relative URL against a base URL.
pub fn resolve(base: &str, href: &str) -> String {
    // Already absolute
    if is_absolute(href) {
        return href.to_string();
    }

    // Absolute path - combine with base domain
    if href.starts_with('/') {
        return resolve_absolute_path(base, href);
    }

    // Relative path - combine with base directory
    resolve_relative_path(base, href)
}

/// Whether an href carries its own scheme.
pub fn is_absolute(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Cut an image URL at its `/revision` suffix.
///
/// # Examples
/// ```
/// use ichu_crawler::utils::url::strip_revision;
///
/// assert_eq!(
///     strip_revision("https://static.wikia.nocookie.net/a.png/revision/latest?cb=1"),
///     "https://static.wikia.nocookie.net/a.png"
/// );
/// ```
pub fn strip_revision(src: &str) -> &str {
    match src.find("/revision") {
        Some(idx) => &src[..idx],
        None => src,
    }
}

fn resolve_absolute_path(base: &str, href: &str) -> String {
    if let Some(scheme_end) = base.find("://") {
        let after_scheme = &base[scheme_end + 3..];
        if let Some(slash_idx) = after_scheme.find('/') {
            let domain = &base[..scheme_end + 3 + slash_idx];
            return format!("{domain}{href}");
        }
    }
    join_path(base, href)
}

fn resolve_relative_path(base: &str, href: &str) -> String {
    let base_dir = if base.ends_with('/') {
        base.to_string()
    } else {
        match base.rfind('/') {
            Some(idx) if idx > base.find("://").map_or(0, |i| i + 2) => base[..=idx].to_string(),
            _ => format!("{base}/"),
        }
    };

    format!("{base_dir}{href}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path_keeps_characters() {
        assert_eq!(
            join_path(
                "https://ichu.fandom.com",
                "/wiki/(Kirameki_☆_Sweet_Surprise)_Tatsuomi_Ryugu_N/HN"
            ),
            "https://ichu.fandom.com/wiki/(Kirameki_☆_Sweet_Surprise)_Tatsuomi_Ryugu_N/HN"
        );
    }

    #[test]
    fn test_resolve_absolute_url() {
        assert_eq!(
            resolve("https://ichu.fandom.com/wiki/", "https://other.com/page"),
            "https://other.com/page"
        );
    }

    #[test]
    fn test_resolve_absolute_path() {
        assert_eq!(
            resolve("https://ichu.fandom.com/wiki/Category:Cards", "/wiki/Card_GR"),
            "https://ichu.fandom.com/wiki/Card_GR"
        );
        assert_eq!(
            resolve("https://ichu.fandom.com", "/wiki/Card_GR"),
            "https://ichu.fandom.com/wiki/Card_GR"
        );
    }

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve("https://ichu.fandom.com/wiki/Cards", "Card_GR"),
            "https://ichu.fandom.com/wiki/Card_GR"
        );
        assert_eq!(
            resolve("https://ichu.fandom.com", "wiki"),
            "https://ichu.fandom.com/wiki"
        );
    }

    #[test]
    fn test_strip_revision() {
        assert_eq!(strip_revision("https://x/a.png"), "https://x/a.png");
        assert_eq!(
            strip_revision("https://x/a.png/revision/latest/scale-to-width-down/100"),
            "https://x/a.png"
        );
    }
}
