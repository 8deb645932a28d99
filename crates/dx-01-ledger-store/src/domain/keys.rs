//! # Key Ranges
//!
//! Range scans are half-open `[start, end)` in byte order of the UTF-8 key.
//! An empty `start` means "from the first key" and an empty `end` means "to
//! the last key", matching the hosting ledger.

use crate::domain::LedgerError;

/// The `[prefix, successor(prefix))` bounds covering one key namespace.
///
/// The end bound is the smallest string greater than every key starting with
/// `prefix`: for `data_` it is `data` followed by a backtick. A prefix made
/// only of `U+10FFFF` has no successor and gets the open end `""`.
pub fn namespace_range(prefix: &str) -> (String, String) {
    let mut end: Vec<char> = prefix.chars().collect();
    while let Some(last) = end.pop() {
        if let Some(next) = next_char(last) {
            end.push(next);
            return (prefix.to_string(), end.into_iter().collect());
        }
    }
    (prefix.to_string(), String::new())
}

fn next_char(c: char) -> Option<char> {
    match c {
        char::MAX => None,
        '\u{D7FF}' => Some('\u{E000}'),
        _ => char::from_u32(c as u32 + 1),
    }
}

/// True when `key` falls inside `[start, end)` with open empty bounds.
pub fn key_in_range(key: &str, start: &str, end: &str) -> bool {
    (start.is_empty() || key >= start) && (end.is_empty() || key < end)
}

/// Reject keys the ledger would refuse.
pub fn validate_key(key: &str) -> Result<(), LedgerError> {
    if key.is_empty() {
        return Err(LedgerError::InvalidKey {
            reason: "key must not be empty",
        });
    }
    if key.starts_with('\u{0}') {
        return Err(LedgerError::InvalidKey {
            reason: "key must not start with U+0000 (reserved for composite keys)",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_range_bounds_prefix() {
        let (start, end) = namespace_range("data_");
        assert_eq!(start, "data_");
        assert!(key_in_range("data_r1", &start, &end));
        assert!(key_in_range("data_\u{1F600}", &start, &end));
        assert!(!key_in_range("cost_r1", &start, &end));
        assert!(!key_in_range("datb_", &start, &end));
        assert!(!key_in_range("data", &start, &end));
    }

    #[test]
    fn test_namespace_range_covers_highest_scalar_ids() {
        let (start, end) = namespace_range("data_");
        assert_eq!(end, "data`");
        assert!(key_in_range("data_\u{10FFFF}", &start, &end));
        assert!(key_in_range("data_\u{10FFFF}\u{10FFFF}x", &start, &end));
        assert!(!key_in_range("data`", &start, &end));
    }

    #[test]
    fn test_namespace_range_successor_edges() {
        assert_eq!(namespace_range("a\u{D7FF}").1, "a\u{E000}");
        assert_eq!(namespace_range("a\u{10FFFF}").1, "b");
        assert_eq!(namespace_range("\u{10FFFF}").1, "");
        assert_eq!(namespace_range("").1, "");
    }

    #[test]
    fn test_open_bounds() {
        assert!(key_in_range("anything", "", ""));
        assert!(key_in_range("b", "a", ""));
        assert!(!key_in_range("a", "b", ""));
        assert!(key_in_range("a", "", "b"));
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("data_r1").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("\u{0}composite").is_err());
    }
}
