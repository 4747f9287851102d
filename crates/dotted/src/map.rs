//! Maps addressed by dotted paths.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::collection::{Dotted, DottedCollection, IntoDotted};
use crate::error::DottedError;
use crate::key::Key;
use crate::validate::validate_entries;

/// An insertion-ordered map whose accessors understand dotted paths.
///
/// Keys stored in the map never contain an unescaped `.`: a dotted key is
/// always interpreted as a path into nested containers.
///
/// # Example
///
/// ```
/// use dotted::{DottedCollection, DottedMap};
///
/// let mut map = DottedMap::new();
/// map.set("a.b.c", 5).unwrap();
/// assert_eq!(map.get("a.b.c").unwrap().as_i64(), Some(5));
/// assert!(map.get("a.b").unwrap().is_map());
///
/// map.set("list.0.x", "y").unwrap();
/// assert!(map.get("list").unwrap().is_list());
/// assert_eq!(map.to_json().unwrap(), r#"{"a":{"b":{"c":5}},"list":[{"x":"y"}]}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DottedMap {
    store: IndexMap<String, Dotted>,
}

impl DottedMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a plain JSON object, validating every key at every depth.
    pub fn from_map(map: Map<String, Value>) -> Result<Self, DottedError> {
        validate_entries(&map)?;
        Ok(Self::from_valid(map))
    }

    /// Wraps an object whose keys are already validated.
    pub(crate) fn from_valid(map: Map<String, Value>) -> Self {
        Self {
            store: map
                .into_iter()
                .map(|(k, v)| (k, Dotted::wrap_valid(v)))
                .collect(),
        }
    }

    /// Applies [`set`](DottedCollection::set) to every entry in order.
    ///
    /// Entries with dotted keys address nested paths. Stops at the first
    /// failing entry; entries before it stay applied.
    pub fn update<K, V, I>(&mut self, entries: I) -> Result<(), DottedError>
    where
        K: AsRef<str>,
        V: IntoDotted,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.set(key.as_ref(), value)?;
        }
        Ok(())
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Dotted> {
        self.store.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Dotted> {
        self.store.iter()
    }

    pub fn into_value(self) -> Value {
        Value::Object(
            self.store
                .into_iter()
                .map(|(k, v)| (k, v.into_value()))
                .collect(),
        )
    }
}

impl DottedCollection for DottedMap {
    fn get<'k>(&self, key: impl Into<Key<'k>>) -> Result<&Dotted, DottedError> {
        let key: Key<'k> = key.into();
        let Key::Path(path) = &key else {
            return Err(DottedError::KeyNotFound(key.to_string()));
        };
        let path: &str = path;
        match key.split_head() {
            None => self
                .store
                .get(path)
                .ok_or_else(|| DottedError::KeyNotFound(path.to_string())),
            Some((head, rest)) => self
                .store
                .get(head)
                .ok_or_else(|| DottedError::KeyNotFound(head.to_string()))?
                .descend(head, rest)?
                .get(rest),
        }
    }

    fn get_mut<'k>(&mut self, key: impl Into<Key<'k>>) -> Result<&mut Dotted, DottedError> {
        let key: Key<'k> = key.into();
        let Key::Path(path) = &key else {
            return Err(DottedError::KeyNotFound(key.to_string()));
        };
        let path: &str = path;
        match key.split_head() {
            None => self
                .store
                .get_mut(path)
                .ok_or_else(|| DottedError::KeyNotFound(path.to_string())),
            Some((head, rest)) => self
                .store
                .get_mut(head)
                .ok_or_else(|| DottedError::KeyNotFound(head.to_string()))?
                .descend_mut(head, rest)?
                .get_mut(rest),
        }
    }

    fn set<'k>(
        &mut self,
        key: impl Into<Key<'k>>,
        value: impl IntoDotted,
    ) -> Result<(), DottedError> {
        let key: Key<'k> = key.into();
        let Key::Path(path) = &key else {
            return Err(DottedError::non_string_key(key.as_index()?));
        };
        let path: &str = path;
        let value = value.into_dotted()?;
        let Some((head, rest)) = key.split_head() else {
            self.store.insert(path.to_string(), value);
            return Ok(());
        };
        if let Some(child) = self.store.get_mut(head) {
            return child.descend_mut(head, rest)?.set(rest, value);
        }
        // The new container is attached only once the nested write succeeded.
        let mut child = Dotted::container_for(&Key::from(rest));
        child.set(rest, value)?;
        tracing::trace!(segment = head, list = child.is_list(), "auto-vivified container");
        self.store.insert(head.to_string(), child);
        Ok(())
    }

    fn delete<'k>(&mut self, key: impl Into<Key<'k>>) -> Result<Dotted, DottedError> {
        let key: Key<'k> = key.into();
        let Key::Path(path) = &key else {
            return Err(DottedError::KeyNotFound(key.to_string()));
        };
        let path: &str = path;
        match key.split_head() {
            None => self
                .store
                .shift_remove(path)
                .ok_or_else(|| DottedError::KeyNotFound(path.to_string())),
            Some((head, rest)) => self
                .store
                .get_mut(head)
                .ok_or_else(|| DottedError::KeyNotFound(head.to_string()))?
                .descend_mut(head, rest)?
                .delete(rest),
        }
    }

    fn contains<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        let key: Key<'k> = key.into();
        let Key::Path(path) = &key else {
            return false;
        };
        let path: &str = path;
        match key.split_head() {
            None => self.store.contains_key(path),
            Some((head, rest)) => match self.store.get(head) {
                Some(child) => child.contains(rest),
                None => false,
            },
        }
    }

    fn to_value(&self) -> Value {
        Value::Object(
            self.store
                .iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}

impl<'a> IntoIterator for &'a DottedMap {
    type Item = (&'a String, &'a Dotted);
    type IntoIter = indexmap::map::Iter<'a, String, Dotted>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

impl Serialize for DottedMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.store.len()))?;
        for (key, value) in &self.store {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl PartialEq<Value> for DottedMap {
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::Object(map) => {
                map.len() == self.store.len()
                    && self
                        .store
                        .iter()
                        .all(|(k, v)| map.get(k).is_some_and(|other| v == other))
            }
            _ => false,
        }
    }
}

impl fmt::Display for DottedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
