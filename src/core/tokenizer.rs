//! Word token extraction
//!
//! A token is one uppercase ASCII letter followed by any number of lowercase
//! ASCII letters. Matching is case-sensitive and never crosses a line break.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::TokenCounts;

/// The fixed token pattern
pub const TOKEN_PATTERN: &str = r"[A-Z][a-z]*";

pub static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(TOKEN_PATTERN).expect("Invalid TOKEN_RE regex"));

/// Iterate over the tokens of a single line, left to right
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE.find_iter(line).map(|m| m.as_str())
}

/// Count tokens in `text` line by line, adding to `counts`
pub fn count_tokens(text: &str, counts: &mut TokenCounts) {
    for line in text.lines() {
        for token in tokens(line) {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_split_camel_case() {
        let found: Vec<_> = tokens("HalloWeltTest123").collect();
        assert_eq!(found, vec!["Hallo", "Welt", "Test"]);
    }

    #[test]
    fn test_tokens_all_caps_match_single_letters() {
        let found: Vec<_> = tokens("Apple apple APPLE Banana").collect();
        assert_eq!(found, vec!["Apple", "A", "P", "P", "L", "E", "Banana"]);
    }

    #[test]
    fn test_tokens_ignore_lowercase_and_digits() {
        assert_eq!(tokens("hello world 42").count(), 0);
        assert_eq!(tokens("").count(), 0);
    }

    #[test]
    fn test_tokens_ascii_only() {
        // Umlauts are outside [a-z], so the match stops before them
        let found: Vec<_> = tokens("Häuser Ärger").collect();
        assert_eq!(found, vec!["H"]);
    }

    #[test]
    fn test_count_tokens_accumulates() {
        let mut counts = TokenCounts::new();
        count_tokens("Foo Bar\nFoo\r\nbaz Foo", &mut counts);
        assert_eq!(counts.get("Foo"), Some(&3));
        assert_eq!(counts.get("Bar"), Some(&1));
        assert_eq!(counts.len(), 2);

        count_tokens("Bar", &mut counts);
        assert_eq!(counts.get("Bar"), Some(&2));
    }

    #[test]
    fn test_count_tokens_do_not_span_lines() {
        let mut counts = TokenCounts::new();
        count_tokens("Ab\ncd", &mut counts);
        assert_eq!(counts.get("Ab"), Some(&1));
        assert!(!counts.contains_key("Abcd"));
    }
}
