//! Sequences addressed by dotted paths.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::collection::{Dotted, DottedCollection, IntoDotted};
use crate::error::DottedError;
use crate::key::{parse_index, Key};
use crate::validate::validate_value;

/// A sequence whose accessors understand dotted paths.
///
/// Indices are `usize`, digit strings (`"2"`), or dotted paths whose first
/// segment is digits (`"2.name"`). Writes may only replace an existing slot
/// or append at exactly `len()`; there is no gap filling.
///
/// # Example
///
/// ```
/// use dotted::{DottedCollection, DottedList, DottedError};
///
/// let mut list = DottedList::new();
/// list.set(0usize, "zero").unwrap();
/// list.set("1", "one").unwrap();
/// assert!(matches!(list.set(3usize, "three"), Err(DottedError::IndexOutOfRange { .. })));
///
/// list.set("2.0", 7).unwrap();
/// assert_eq!(list.to_json().unwrap(), r#"["zero","one",[7]]"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DottedList {
    store: Vec<Dotted>,
}

impl DottedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a plain JSON array, validating every key at every depth.
    pub fn from_vec(items: Vec<Value>) -> Result<Self, DottedError> {
        items.iter().try_for_each(validate_value)?;
        Ok(Self::from_valid(items))
    }

    /// Wraps items whose keys are already validated.
    pub(crate) fn from_valid(items: Vec<Value>) -> Self {
        Self {
            store: items.into_iter().map(Dotted::wrap_valid).collect(),
        }
    }

    /// Appends `value` at the end.
    pub fn push(&mut self, value: impl IntoDotted) -> Result<(), DottedError> {
        self.store.push(value.into_dotted()?);
        Ok(())
    }

    /// Inserts `value` at a plain position, shifting later elements right.
    ///
    /// Unlike [`set`](DottedCollection::set) this is not limited to the
    /// append position; an `index` past the end appends.
    pub fn insert(&mut self, index: usize, value: impl IntoDotted) -> Result<(), DottedError> {
        let value = value.into_dotted()?;
        let index = index.min(self.store.len());
        self.store.insert(index, value);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dotted> {
        self.store.iter()
    }

    pub fn into_value(self) -> Value {
        Value::Array(self.store.into_iter().map(Dotted::into_value).collect())
    }

    fn out_of_range(&self, index: usize) -> DottedError {
        DottedError::IndexOutOfRange {
            index,
            len: self.store.len(),
        }
    }
}

impl DottedCollection for DottedList {
    fn get<'k>(&self, key: impl Into<Key<'k>>) -> Result<&Dotted, DottedError> {
        let key: Key<'k> = key.into();
        match key.split_head() {
            None => {
                let index = key.as_index()?;
                self.store.get(index).ok_or_else(|| self.out_of_range(index))
            }
            Some((head, rest)) => {
                let index = parse_index(head)?;
                self.store
                    .get(index)
                    .ok_or_else(|| self.out_of_range(index))?
                    .descend(head, rest)?
                    .get(rest)
            }
        }
    }

    fn get_mut<'k>(&mut self, key: impl Into<Key<'k>>) -> Result<&mut Dotted, DottedError> {
        let key: Key<'k> = key.into();
        let (index, rest) = match key.split_head() {
            None => (key.as_index()?, None),
            Some((head, rest)) => (parse_index(head)?, Some((head, rest))),
        };
        let len = self.store.len();
        let child = self
            .store
            .get_mut(index)
            .ok_or(DottedError::IndexOutOfRange { index, len })?;
        match rest {
            None => Ok(child),
            Some((head, rest)) => child.descend_mut(head, rest)?.get_mut(rest),
        }
    }

    fn set<'k>(
        &mut self,
        key: impl Into<Key<'k>>,
        value: impl IntoDotted,
    ) -> Result<(), DottedError> {
        let key: Key<'k> = key.into();
        let value = value.into_dotted()?;
        let len = self.store.len();
        let Some((head, rest)) = key.split_head() else {
            let index = key.as_index()?;
            if index == len {
                self.store.push(value);
            } else {
                let slot = self
                    .store
                    .get_mut(index)
                    .ok_or(DottedError::IndexOutOfRange { index, len })?;
                *slot = value;
            }
            return Ok(());
        };
        let index = parse_index(head)?;
        if index == len {
            // The new container is attached only once the nested write succeeded.
            let mut child = Dotted::container_for(&Key::from(rest));
            child.set(rest, value)?;
            tracing::trace!(segment = head, list = child.is_list(), "auto-vivified container");
            self.store.push(child);
            return Ok(());
        }
        self.store
            .get_mut(index)
            .ok_or(DottedError::IndexOutOfRange { index, len })?
            .descend_mut(head, rest)?
            .set(rest, value)
    }

    fn delete<'k>(&mut self, key: impl Into<Key<'k>>) -> Result<Dotted, DottedError> {
        let key: Key<'k> = key.into();
        let len = self.store.len();
        match key.split_head() {
            None => {
                let index = key.as_index()?;
                if index >= len {
                    return Err(DottedError::IndexOutOfRange { index, len });
                }
                Ok(self.store.remove(index))
            }
            Some((head, rest)) => {
                let index = parse_index(head)?;
                self.store
                    .get_mut(index)
                    .ok_or(DottedError::IndexOutOfRange { index, len })?
                    .descend_mut(head, rest)?
                    .delete(rest)
            }
        }
    }

    fn contains<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        let key: Key<'k> = key.into();
        match key.split_head() {
            None => key.as_index().is_ok_and(|index| index < self.store.len()),
            Some((head, rest)) => match parse_index(head) {
                Ok(index) => self
                    .store
                    .get(index)
                    .is_some_and(|child| child.contains(rest)),
                Err(_) => false,
            },
        }
    }

    fn to_value(&self) -> Value {
        Value::Array(self.store.iter().map(Dotted::to_value).collect())
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}

impl<'a> IntoIterator for &'a DottedList {
    type Item = &'a Dotted;
    type IntoIter = std::slice::Iter<'a, Dotted>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

impl Serialize for DottedList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.store)
    }
}

impl PartialEq<Value> for DottedList {
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::Array(items) => {
                items.len() == self.store.len()
                    && self.store.iter().zip(items).all(|(a, b)| a == b)
            }
            _ => false,
        }
    }
}

impl fmt::Display for DottedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
