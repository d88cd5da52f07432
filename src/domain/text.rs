//! Cleanup for editor-entered text

use crate::domain::LinkTagger;
use regex::Regex;
use std::sync::OnceLock;

fn newline_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\r\n|\r|\n").unwrap())
}

/// Convert every line break (`\r\n`, `\r` or `\n`) into `<br />`.
pub fn newlines_to_breaks(raw: &str) -> String {
    newline_regex().replace_all(raw, "<br />").into_owned()
}

/// Prepare a free-text field for email markup: line breaks become `<br />`
/// and links to tracked domains get campaign parameters.
pub fn clean_text(raw: &str, tagger: &LinkTagger) -> String {
    tagger.tag_links(&newlines_to_breaks(raw))
}
