//! The shared contract of dotted containers and the node type tying them
//! together.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::DottedError;
use crate::key::Key;
use crate::list::DottedList;
use crate::map::DottedMap;
use crate::scalar::Scalar;
use crate::validate::validate_value;

/// Path-aware access shared by [`DottedMap`], [`DottedList`] and [`Dotted`].
///
/// Every accessor takes either a plain key/index or a dotted path such as
/// `"a.b.2.c"`. Paths are consumed one segment at a time, each container
/// resolving its own segment and handing the remainder to the child.
pub trait DottedCollection {
    /// Returns the node at `key`.
    fn get<'k>(&self, key: impl Into<Key<'k>>) -> Result<&Dotted, DottedError>;

    /// Returns the node at `key` for in-place mutation.
    fn get_mut<'k>(&mut self, key: impl Into<Key<'k>>) -> Result<&mut Dotted, DottedError>;

    /// Stores `value` at `key`, creating missing intermediate containers.
    ///
    /// On error nothing is modified.
    fn set<'k>(&mut self, key: impl Into<Key<'k>>, value: impl IntoDotted)
        -> Result<(), DottedError>;

    /// Removes and returns the node at `key`.
    fn delete<'k>(&mut self, key: impl Into<Key<'k>>) -> Result<Dotted, DottedError>;

    /// Like [`get`](Self::get), but reports every failure as `false`.
    fn contains<'k>(&self, key: impl Into<Key<'k>>) -> bool;

    /// Detached plain copy with every wrapper removed.
    fn to_value(&self) -> Value;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compact JSON text of the plain projection.
    fn to_json(&self) -> Result<String, DottedError>
    where
        Self: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    fn to_json_pretty(&self) -> Result<String, DottedError>
    where
        Self: Serialize,
    {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Conversion into a [`Dotted`] node, validating plain values on the way.
pub trait IntoDotted {
    fn into_dotted(self) -> Result<Dotted, DottedError>;
}

/// A node of a dotted tree: a map, a sequence, or a scalar leaf.
///
/// Nested maps and sequences are always wrapped; a raw container never
/// appears below a node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Dotted {
    Map(DottedMap),
    List(DottedList),
    Scalar(Scalar),
}

impl Dotted {
    /// Wraps a plain value: objects become [`DottedMap`]s, arrays become
    /// [`DottedList`]s, scalars pass through as leaves.
    ///
    /// # Errors
    ///
    /// [`DottedError::InvalidKey`] if any map key at any depth contains an
    /// unescaped `.`. Validation runs before anything is wrapped.
    ///
    /// # Example
    ///
    /// ```
    /// use dotted::{Dotted, DottedCollection};
    /// use serde_json::json;
    ///
    /// let node = Dotted::factory(json!([1, 2, {"hi": "world"}])).unwrap();
    /// assert!(node.is_list());
    /// assert!(node.get("2").unwrap().is_map());
    /// assert_eq!(node.get("2.hi").unwrap().as_str(), Some("world"));
    ///
    /// assert!(Dotted::factory(json!(1)).unwrap().is_scalar());
    /// ```
    pub fn factory(value: Value) -> Result<Dotted, DottedError> {
        validate_value(&value)?;
        Ok(Dotted::wrap_valid(value))
    }

    pub(crate) fn wrap_valid(value: Value) -> Dotted {
        match value {
            Value::Object(map) => Dotted::Map(DottedMap::from_valid(map)),
            Value::Array(items) => Dotted::List(DottedList::from_valid(items)),
            Value::Null => Dotted::Scalar(Scalar::Null),
            Value::Bool(b) => Dotted::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Dotted::Scalar(Scalar::Number(n)),
            Value::String(s) => Dotted::Scalar(Scalar::String(s)),
        }
    }

    /// Parses JSON text and wraps the result.
    ///
    /// A bare JSON string or number comes back as a scalar leaf.
    pub fn parse_json(text: &str) -> Result<Dotted, DottedError> {
        let value: Value = serde_json::from_str(text)?;
        Dotted::factory(value)
    }

    /// Returns the empty container suited to the first segment of `next`:
    /// a sequence for numeric segments, a map otherwise.
    ///
    /// Used when a write has to create a missing intermediate container.
    pub fn container_for(next: &Key<'_>) -> Dotted {
        if next.addresses_index() {
            Dotted::List(DottedList::new())
        } else {
            Dotted::Map(DottedMap::new())
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Dotted::Map(map) => map.into_value(),
            Dotted::List(list) => list.into_value(),
            Dotted::Scalar(scalar) => scalar.into_value(),
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Dotted::Map(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Dotted::List(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Dotted::Scalar(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Dotted::Scalar(Scalar::Null))
    }

    pub fn as_map(&self) -> Option<&DottedMap> {
        match self {
            Dotted::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut DottedMap> {
        match self {
            Dotted::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&DottedList> {
        match self {
            Dotted::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut DottedList> {
        match self {
            Dotted::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Dotted::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar()
            .and_then(Scalar::as_number)
            .and_then(|n| n.as_i64())
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_scalar()
            .and_then(Scalar::as_number)
            .and_then(|n| n.as_u64())
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar()
            .and_then(Scalar::as_number)
            .and_then(|n| n.as_f64())
    }

    /// Returns `self` if it is a container, otherwise the traversal error
    /// for reaching `rest` through `segment`.
    pub(crate) fn descend(&self, segment: &str, rest: &str) -> Result<&Dotted, DottedError> {
        match self {
            Dotted::Scalar(_) => Err(DottedError::traversal(segment, rest)),
            node => Ok(node),
        }
    }

    pub(crate) fn descend_mut(
        &mut self,
        segment: &str,
        rest: &str,
    ) -> Result<&mut Dotted, DottedError> {
        match self {
            Dotted::Scalar(_) => Err(DottedError::traversal(segment, rest)),
            node => Ok(node),
        }
    }
}

fn scalar_root<'k>(key: impl Into<Key<'k>>) -> DottedError {
    let key: Key<'k> = key.into();
    DottedError::traversal("", key)
}

impl DottedCollection for Dotted {
    fn get<'k>(&self, key: impl Into<Key<'k>>) -> Result<&Dotted, DottedError> {
        match self {
            Dotted::Map(map) => map.get(key),
            Dotted::List(list) => list.get(key),
            Dotted::Scalar(_) => Err(scalar_root(key)),
        }
    }

    fn get_mut<'k>(&mut self, key: impl Into<Key<'k>>) -> Result<&mut Dotted, DottedError> {
        match self {
            Dotted::Map(map) => map.get_mut(key),
            Dotted::List(list) => list.get_mut(key),
            Dotted::Scalar(_) => Err(scalar_root(key)),
        }
    }

    fn set<'k>(
        &mut self,
        key: impl Into<Key<'k>>,
        value: impl IntoDotted,
    ) -> Result<(), DottedError> {
        match self {
            Dotted::Map(map) => map.set(key, value),
            Dotted::List(list) => list.set(key, value),
            Dotted::Scalar(_) => Err(scalar_root(key)),
        }
    }

    fn delete<'k>(&mut self, key: impl Into<Key<'k>>) -> Result<Dotted, DottedError> {
        match self {
            Dotted::Map(map) => map.delete(key),
            Dotted::List(list) => list.delete(key),
            Dotted::Scalar(_) => Err(scalar_root(key)),
        }
    }

    fn contains<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        match self {
            Dotted::Map(map) => map.contains(key),
            Dotted::List(list) => list.contains(key),
            Dotted::Scalar(_) => false,
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Dotted::Map(map) => map.to_value(),
            Dotted::List(list) => list.to_value(),
            Dotted::Scalar(scalar) => scalar.to_value(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Dotted::Map(map) => map.len(),
            Dotted::List(list) => list.len(),
            Dotted::Scalar(_) => 0,
        }
    }
}

impl Serialize for Dotted {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dotted::Map(map) => map.serialize(serializer),
            Dotted::List(list) => list.serialize(serializer),
            Dotted::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl TryFrom<Value> for Dotted {
    type Error = DottedError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Dotted::factory(value)
    }
}

impl FromStr for Dotted {
    type Err = DottedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dotted::parse_json(s)
    }
}

impl From<Dotted> for Value {
    fn from(node: Dotted) -> Self {
        node.into_value()
    }
}

impl PartialEq<Value> for Dotted {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Dotted::Map(map), Value::Object(_)) => map == other,
            (Dotted::List(list), Value::Array(_)) => list == other,
            (Dotted::Scalar(scalar), _) => scalar.to_value() == *other,
            _ => false,
        }
    }
}

impl fmt::Display for Dotted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dotted::Map(map) => fmt::Display::fmt(map, f),
            Dotted::List(list) => fmt::Display::fmt(list, f),
            Dotted::Scalar(scalar) => {
                let text = serde_json::to_string(scalar).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

impl From<DottedMap> for Dotted {
    fn from(map: DottedMap) -> Self {
        Dotted::Map(map)
    }
}

impl From<DottedList> for Dotted {
    fn from(list: DottedList) -> Self {
        Dotted::List(list)
    }
}

impl IntoDotted for Dotted {
    fn into_dotted(self) -> Result<Dotted, DottedError> {
        Ok(self)
    }
}

impl IntoDotted for DottedMap {
    fn into_dotted(self) -> Result<Dotted, DottedError> {
        Ok(Dotted::Map(self))
    }
}

impl IntoDotted for DottedList {
    fn into_dotted(self) -> Result<Dotted, DottedError> {
        Ok(Dotted::List(self))
    }
}

impl IntoDotted for Value {
    fn into_dotted(self) -> Result<Dotted, DottedError> {
        Dotted::factory(self)
    }
}

macro_rules! dotted_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Dotted {
                fn from(value: $ty) -> Self {
                    Dotted::Scalar(Scalar::from(value))
                }
            }

            impl IntoDotted for $ty {
                fn into_dotted(self) -> Result<Dotted, DottedError> {
                    Ok(Dotted::Scalar(Scalar::from(self)))
                }
            }
        )*
    };
}

dotted_scalar!(
    Scalar, bool, &str, String, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
);

impl TryFrom<f64> for Dotted {
    type Error = DottedError;

    fn try_from(n: f64) -> Result<Self, Self::Error> {
        Scalar::try_from(n).map(Dotted::Scalar)
    }
}

impl IntoDotted for f64 {
    fn into_dotted(self) -> Result<Dotted, DottedError> {
        Dotted::try_from(self)
    }
}
