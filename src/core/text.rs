//! Text clean-up for names coming off the deck page.

/// Collapse every whitespace run (including newlines and tabs) to a single
/// space and trim both ends.
#[must_use]
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip characters that would break a wiki link: `# < > [ ] { } |`.
#[must_use]
pub fn sanitize_card_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '#' | '<' | '>' | '[' | ']' | '{' | '}' | '|'))
        .collect()
}

/// Strip characters that are not allowed in file names: `< > : " / \ | ? *`.
#[must_use]
pub fn sanitize_deck_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*'))
        .collect()
}
