//! Keys accepted by the path-aware accessors.

use std::borrow::Cow;
use std::fmt;

use crate::error::DottedError;
use crate::split::{is_index, split_head};

/// A plain sequence index, a plain map key, or a dotted path.
///
/// Strings are interpreted lazily: `"3"` is a map key when applied to a map
/// and index 3 when applied to a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    Index(usize),
    Path(Cow<'a, str>),
}

impl Key<'_> {
    /// Splits off the first segment: `Some((head, rest))` for dotted paths.
    pub fn split_head(&self) -> Option<(&str, &str)> {
        match self {
            Key::Index(_) => None,
            Key::Path(path) => split_head(path),
        }
    }

    /// The segment that would be consumed first from this key.
    pub fn first_segment(&self) -> Cow<'_, str> {
        match self {
            Key::Index(index) => Cow::Owned(index.to_string()),
            Key::Path(path) => match split_head(path) {
                Some((head, _)) => Cow::Borrowed(head),
                None => Cow::Borrowed(path.as_ref()),
            },
        }
    }

    /// Returns `true` if the first segment addresses a sequence position.
    pub fn addresses_index(&self) -> bool {
        match self {
            Key::Index(_) => true,
            Key::Path(_) => is_index(&self.first_segment()),
        }
    }

    /// Interprets a non-dotted key as a sequence index.
    pub fn as_index(&self) -> Result<usize, DottedError> {
        match self {
            Key::Index(index) => Ok(*index),
            Key::Path(path) => parse_index(path),
        }
    }
}

/// Parses a single segment as a sequence index.
///
/// Digit strings too large for `usize` saturate to `usize::MAX`, which no
/// sequence can reach, so they surface as out-of-range positions.
pub(crate) fn parse_index(segment: &str) -> Result<usize, DottedError> {
    if !is_index(segment) {
        return Err(DottedError::InvalidIndex(segment.to_string()));
    }
    Ok(segment.parse().unwrap_or(usize::MAX))
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Path(path) => f.write_str(path),
        }
    }
}

impl From<usize> for Key<'static> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(path: &'a str) -> Self {
        Key::Path(Cow::Borrowed(path))
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(path: &'a String) -> Self {
        Key::Path(Cow::Borrowed(path.as_str()))
    }
}

impl From<String> for Key<'static> {
    fn from(path: String) -> Self {
        Key::Path(Cow::Owned(path))
    }
}

impl<'a> From<Cow<'a, str>> for Key<'a> {
    fn from(path: Cow<'a, str>) -> Self {
        Key::Path(path)
    }
}
