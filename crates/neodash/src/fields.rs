//! Flat `key=value&key=value` field decoding.
//!
//! Values are returned raw (still encoded); typing is left to the record
//! that owns them.

use std::collections::HashMap;

/// Separator between `key=value` pairs
pub const PAIR_SEPARATOR: char = '&';
/// Separator between a key and its value (first occurrence only)
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Raw field values keyed by field name
pub type Fields = HashMap<String, String>;

/// Parse a `key=value&key=value` segment into a field map.
///
/// Only the first `=` of each pair separates key from value, so padded
/// Base64 values survive intact. Pairs without a key are skipped; a pair
/// without any `=` maps its key to an empty value. Later duplicates win.
pub fn parse_fields(text: &str) -> Fields {
    let mut fields = Fields::new();
    for pair in text.split(PAIR_SEPARATOR) {
        let (key, value) = pair.split_once(KEY_VALUE_SEPARATOR).unwrap_or((pair, ""));
        if key.is_empty() {
            continue;
        }
        fields.insert(key.to_string(), value.to_string());
    }
    fields
}

/// Look up a field, treating an empty value as absent
pub fn non_empty<'a>(fields: &'a Fields, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields_basic() {
        let fields = parse_fields("uniqueId=42&token=abc");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["uniqueId"], "42");
        assert_eq!(fields["token"], "abc");
    }

    #[test]
    fn test_parse_fields_splits_on_first_equals_only() {
        let fields = parse_fields("a=1&b=2=x");
        assert_eq!(fields["a"], "1");
        assert_eq!(fields["b"], "2=x");
    }

    #[test]
    fn test_parse_fields_keeps_base64_padding() {
        let fields = parse_fields("levelAuthor=Q0pFWg==&levelId=R2FtYTMw");
        assert_eq!(fields["levelAuthor"], "Q0pFWg==");
        assert_eq!(fields["levelId"], "R2FtYTMw");
    }

    #[test]
    fn test_parse_fields_skips_empty_keys() {
        let fields = parse_fields("=orphan&&a=1&");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["a"], "1");
    }

    #[test]
    fn test_parse_fields_key_without_value() {
        let fields = parse_fields("flag&a=");
        assert_eq!(fields["flag"], "");
        assert_eq!(fields["a"], "");
        assert_eq!(non_empty(&fields, "flag"), None);
        assert_eq!(non_empty(&fields, "missing"), None);
    }

    #[test]
    fn test_parse_fields_last_duplicate_wins() {
        let fields = parse_fields("a=1&a=2");
        assert_eq!(fields["a"], "2");
    }

    #[test]
    fn test_parse_fields_empty_input() {
        assert!(parse_fields("").is_empty());
    }
}
