//! Text normalization helpers shared by the page scrapers.

use scraper::Html;

/// Collapses all runs of whitespace to single spaces and trims the ends.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized excerpt of at most `max_chars` characters.
///
/// Truncation counts `char`s, not bytes, so multi-byte text never splits
/// mid-character.
pub(crate) fn text_excerpt(s: &str, max_chars: usize) -> String {
    collapse_whitespace(s).chars().take(max_chars).collect()
}

/// Whole-document visible text, whitespace-normalized.
pub(crate) fn document_text(doc: &Html) -> String {
    let joined = doc.root_element().text().collect::<Vec<_>>().join(" ");
    collapse_whitespace(&joined)
}
