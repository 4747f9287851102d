//! Logic behind the `dotted` binary.
//!
//! Every function takes the document as JSON text and returns JSON text, so
//! the binary only has to deal with stdin, stdout and exit codes.

use thiserror::Error;

use crate::collection::{Dotted, DottedCollection};
use crate::error::DottedError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("document: {0}")]
    Document(DottedError),
    #[error("value: {0}")]
    Value(DottedError),
    #[error("{path}: {source}")]
    Path { path: String, source: DottedError },
}

/// Output formatting for commands that print JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub pretty: bool,
}

fn parse_document(doc_json: &str) -> Result<Dotted, CliError> {
    Dotted::parse_json(doc_json).map_err(CliError::Document)
}

fn path_error(path: &str) -> impl FnOnce(DottedError) -> CliError + '_ {
    move |source| CliError::Path {
        path: path.to_string(),
        source,
    }
}

fn render(node: &Dotted, options: OutputOptions) -> Result<String, CliError> {
    let text = if options.pretty {
        node.to_json_pretty()
    } else {
        node.to_json()
    };
    text.map_err(CliError::Document)
}

/// Looks up `path` in the document and returns the value found as JSON.
///
/// # Example
///
/// ```
/// use dotted::cli::{lookup_path, OutputOptions};
///
/// let out = lookup_path(r#"{"a": [{"b": 1}]}"#, "a.0", OutputOptions::default()).unwrap();
/// assert_eq!(out, r#"{"b":1}"#);
/// ```
pub fn lookup_path(doc_json: &str, path: &str, options: OutputOptions) -> Result<String, CliError> {
    let doc = parse_document(doc_json)?;
    let node = doc.get(path).map_err(path_error(path))?;
    render(node, options)
}

/// Stores `value_json` at `path` and returns the updated document.
pub fn set_path(
    doc_json: &str,
    path: &str,
    value_json: &str,
    options: OutputOptions,
) -> Result<String, CliError> {
    let mut doc = parse_document(doc_json)?;
    let value = Dotted::parse_json(value_json).map_err(CliError::Value)?;
    doc.set(path, value).map_err(path_error(path))?;
    tracing::debug!(path, "value stored");
    render(&doc, options)
}

/// Removes the value at `path` and returns the updated document.
pub fn delete_path(doc_json: &str, path: &str, options: OutputOptions) -> Result<String, CliError> {
    let mut doc = parse_document(doc_json)?;
    doc.delete(path).map_err(path_error(path))?;
    tracing::debug!(path, "value removed");
    render(&doc, options)
}

/// Reports whether `path` resolves in the document.
pub fn has_path(doc_json: &str, path: &str) -> Result<bool, CliError> {
    Ok(parse_document(doc_json)?.contains(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"product": {"url": "http://example.com", "tags": ["a", "b"]}}"#;

    #[test]
    fn test_lookup_path() {
        let options = OutputOptions::default();
        assert_eq!(
            lookup_path(DOC, "product.url", options).unwrap(),
            r#""http://example.com""#
        );
        assert_eq!(lookup_path(DOC, "product.tags", options).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_lookup_pretty() {
        let out = lookup_path(DOC, "product.tags", OutputOptions { pretty: true }).unwrap();
        assert_eq!(out, "[\n  \"a\",\n  \"b\"\n]");
    }

    #[test]
    fn test_lookup_missing() {
        let err = lookup_path(DOC, "product.price", OutputOptions::default()).unwrap_err();
        assert_eq!(
            err,
            CliError::Path {
                path: "product.price".to_string(),
                source: DottedError::KeyNotFound("price".to_string()),
            }
        );
    }

    #[test]
    fn test_set_path() {
        let out = set_path(DOC, "product.tags.2", r#""c""#, OutputOptions::default()).unwrap();
        assert_eq!(
            out,
            r#"{"product":{"url":"http://example.com","tags":["a","b","c"]}}"#
        );
    }

    #[test]
    fn test_set_path_invalid_value() {
        assert!(matches!(
            set_path(DOC, "product.x", "{bad", OutputOptions::default()),
            Err(CliError::Value(DottedError::Json(_)))
        ));
        assert!(matches!(
            set_path(DOC, "product.x", r#"{"a.b": 1}"#, OutputOptions::default()),
            Err(CliError::Value(DottedError::InvalidKey { .. }))
        ));
    }

    #[test]
    fn test_delete_path() {
        let out = delete_path(DOC, "product.tags.0", OutputOptions::default()).unwrap();
        assert_eq!(out, r#"{"product":{"url":"http://example.com","tags":["b"]}}"#);
    }

    #[test]
    fn test_has_path() {
        assert!(has_path(DOC, "product.tags.1").unwrap());
        assert!(!has_path(DOC, "product.tags.2").unwrap());
        assert!(!has_path(DOC, "product.url.host").unwrap());
        assert!(matches!(has_path("[", "a"), Err(CliError::Document(_))));
    }
}
