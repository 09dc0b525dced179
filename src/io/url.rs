//! Deck page URL normalization.

use std::sync::LazyLock;

use regex::Regex;

static LOCALE_PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"request_locale=\w+").unwrap()
});

/// Force the English locale on a deck page URL.
///
/// Adds `request_locale=en` when the URL has no locale parameter, otherwise
/// rewrites the first locale value to `en`.
///
/// ```
/// use ygo_decklist::io::ensure_english_url;
///
/// assert_eq!(
///     ensure_english_url("https://example.com/deck?cgid=1&request_locale=ja"),
///     "https://example.com/deck?cgid=1&request_locale=en"
/// );
/// ```
#[must_use]
pub fn ensure_english_url(url: &str) -> String {
    if !url.contains("request_locale=") {
        let separator = if url.contains('?') { '&' } else { '?' };
        return format!("{url}{separator}request_locale=en");
    }
    LOCALE_PARAM_REGEX
        .replace(url, "request_locale=en")
        .into_owned()
}
