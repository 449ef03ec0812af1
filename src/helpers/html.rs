//! HTML helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// An opening or closing tag, including one left unterminated at end of input
    static ref TAG: Regex = Regex::new(r"</?[^>]+(>|$)").unwrap();
}

/// Strip HTML tags from a string
pub fn strip_tags(s: &str) -> String {
    TAG.replace_all(s, "").into_owned()
}

/// Count whitespace-separated words in text that may contain markup
pub fn count_words(html: &str) -> usize {
    strip_tags(html).split_whitespace().count()
}
