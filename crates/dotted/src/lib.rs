//! Dotted-path access to nested JSON maps and lists.
//!
//! A single string key such as `"a.b.2.c"` reads, writes, deletes or tests a
//! deeply nested value. Numeric segments address sequence positions, other
//! segments address map keys, and `\.` is a literal dot inside a segment.
//! Writes create missing intermediate containers, choosing a list when the
//! next segment is numeric and a map otherwise.
//!
//! # Example
//!
//! ```
//! use dotted::{dot, dot_json, DottedCollection, DottedError};
//! use serde_json::json;
//!
//! let mut config = dot(json!({"server": {"hosts": ["a", "b"]}})).unwrap();
//! assert_eq!(config.get("server.hosts.1").unwrap().as_str(), Some("b"));
//!
//! config.set("server.tls.enabled", true).unwrap();
//! config.set("server.hosts.2", "c").unwrap();
//! assert!(matches!(
//!     config.set("server.hosts.9", "z"),
//!     Err(DottedError::IndexOutOfRange { .. })
//! ));
//!
//! assert!(config.contains("server.tls.enabled"));
//! assert!(!config.contains("server.port.number"));
//!
//! let same = dot_json(&config.to_json().unwrap()).unwrap();
//! assert_eq!(same.to_value(), config.to_value());
//! ```

pub mod cli;

mod collection;
pub use collection::{Dotted, DottedCollection, IntoDotted};

mod error;
pub use error::DottedError;

mod key;
pub use key::Key;

mod list;
pub use list::DottedList;

mod map;
pub use map::DottedMap;

mod scalar;
pub use scalar::Scalar;

pub mod split;
pub use split::{escape_key, is_dotted_key, is_index, join_path, split_key};

mod validate;
pub use validate::validate_value;

use serde_json::Value;

/// Wraps a plain value in dotted containers. Scalars come back as leaves.
pub fn dot(value: Value) -> Result<Dotted, DottedError> {
    Dotted::factory(value)
}

/// Parses JSON text and wraps the result.
pub fn dot_json(text: &str) -> Result<Dotted, DottedError> {
    Dotted::parse_json(text)
}
