//! Dotted path splitting.
//!
//! A path is a string where `.` separates segments. A `.` immediately
//! preceded by a backslash is part of the segment, not a separator:
//! `"a\\.b.c"` has the two segments `a\.b` and `c`. Escapes are never
//! removed; the backslash stays in the segment text.

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Escape character that turns a following `.` into a literal.
pub const ESCAPE: char = '\\';

/// Splits a dotted path into its segments.
///
/// When `max_keys` is greater than zero, splitting stops after `max_keys`
/// segments and the untouched remainder of the path (escapes and separators
/// included) is returned as one trailing segment. `0` means no limit.
///
/// Leading, trailing and consecutive separators produce empty segments.
///
/// # Example
///
/// ```
/// use dotted::split_key;
///
/// assert_eq!(split_key("a.b.c", 0), vec!["a", "b", "c"]);
/// assert_eq!(split_key("a\\.b.c", 0), vec!["a\\.b", "c"]);
/// assert_eq!(split_key("a.b.c", 1), vec!["a", "b.c"]);
/// assert_eq!(split_key(".a..b.", 0), vec!["", "a", "", "b", ""]);
/// ```
pub fn split_key(key: &str, max_keys: usize) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut prev = None;
    for (i, c) in key.char_indices() {
        if c == SEPARATOR && prev != Some(ESCAPE) {
            result.push(&key[start..i]);
            start = i + c.len_utf8();
            if max_keys > 0 && result.len() == max_keys {
                result.push(&key[start..]);
                return result;
            }
        }
        prev = Some(c);
    }
    result.push(&key[start..]);
    result
}

/// Splits off the first segment of a dotted path.
///
/// Returns `None` when the key has no unescaped separator, otherwise the
/// first segment and the raw remainder.
pub fn split_head(key: &str) -> Option<(&str, &str)> {
    let mut prev = None;
    for (i, c) in key.char_indices() {
        if c == SEPARATOR && prev != Some(ESCAPE) {
            return Some((&key[..i], &key[i + c.len_utf8()..]));
        }
        prev = Some(c);
    }
    None
}

/// Returns `true` if the key contains at least one unescaped `.`.
///
/// # Example
///
/// ```
/// use dotted::is_dotted_key;
///
/// assert!(is_dotted_key("a.b"));
/// assert!(!is_dotted_key("a\\.b"));
/// assert!(!is_dotted_key("ab"));
/// ```
pub fn is_dotted_key(key: &str) -> bool {
    split_head(key).is_some()
}

/// Returns `true` if the segment is a sequence index (ASCII digits only).
///
/// Leading zeros are accepted, so `"01"` addresses index 1.
pub fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Escapes every `.` in a literal key so it can be embedded in a path.
///
/// # Example
///
/// ```
/// use dotted::escape_key;
///
/// assert_eq!(escape_key("example.com"), "example\\.com");
/// assert_eq!(escape_key("plain"), "plain");
/// ```
pub fn escape_key(key: &str) -> String {
    if !key.contains(SEPARATOR) {
        return key.to_string();
    }
    key.replace(SEPARATOR, "\\.")
}

/// Joins already-escaped segments into a dotted path.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(segment.as_ref());
    }
    out
}
