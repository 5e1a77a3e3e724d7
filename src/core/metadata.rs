//! Metadata mapping and value coercion
//!
//! This module provides:
//! - `MetaValue`: the closed set of value kinds a metadata entry can hold
//! - `Metadata`: the per-record key/value mapping, ordered by key

use super::record::ProcessId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value type for metadata entries.
///
/// Coercion to printable text is total: every kind renders, and the
/// `Structured` catch-all renders arbitrary shapes losslessly instead of
/// rejecting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetaValue {
    Str(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Atom-like symbolic tag; renders as its name
    Symbol(String),
    /// Opaque runtime identifier; renders in its canonical form
    Pid(ProcessId),
    /// Arbitrary structured value; renders via serde_json
    Structured(serde_json::Value),
}

impl MetaValue {
    /// Construct the symbolic kind.
    pub fn symbol(name: impl Into<String>) -> Self {
        MetaValue::Symbol(name.into())
    }

    /// Append the printable form of this value to an output buffer.
    ///
    /// Text and raw bytes pass through unchanged; everything else coerces
    /// to its textual rendering.
    pub fn render_into(&self, out: &mut Vec<u8>) {
        match self {
            MetaValue::Str(s) => out.extend_from_slice(s.as_bytes()),
            MetaValue::Bytes(b) => out.extend_from_slice(b),
            MetaValue::Int(i) => out.extend_from_slice(i.to_string().as_bytes()),
            MetaValue::Float(f) => out.extend_from_slice(f.to_string().as_bytes()),
            MetaValue::Bool(b) => out.extend_from_slice(if *b { b"true" } else { b"false" }),
            MetaValue::Symbol(name) => out.extend_from_slice(name.as_bytes()),
            MetaValue::Pid(pid) => out.extend_from_slice(pid.as_str().as_bytes()),
            MetaValue::Structured(value) => out.extend_from_slice(
                serde_json::to_string(value).unwrap_or_default().as_bytes(),
            ),
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Str(s) => write!(f, "{}", s),
            MetaValue::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            MetaValue::Int(i) => write!(f, "{}", i),
            MetaValue::Float(fl) => write!(f, "{}", fl),
            MetaValue::Bool(b) => write!(f, "{}", b),
            MetaValue::Symbol(name) => write!(f, "{}", name),
            MetaValue::Pid(pid) => write!(f, "{}", pid),
            MetaValue::Structured(value) => {
                write!(f, "{}", serde_json::to_string(value).unwrap_or_default())
            }
        }
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::Str(s)
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Str(s.to_string())
    }
}

impl From<Vec<u8>> for MetaValue {
    fn from(b: Vec<u8>) -> Self {
        MetaValue::Bytes(b)
    }
}

impl From<i64> for MetaValue {
    fn from(i: i64) -> Self {
        MetaValue::Int(i)
    }
}

impl From<i32> for MetaValue {
    fn from(i: i32) -> Self {
        MetaValue::Int(i as i64)
    }
}

impl From<f64> for MetaValue {
    fn from(f: f64) -> Self {
        MetaValue::Float(f)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        MetaValue::Bool(b)
    }
}

impl From<ProcessId> for MetaValue {
    fn from(pid: ProcessId) -> Self {
        MetaValue::Pid(pid)
    }
}

impl From<serde_json::Value> for MetaValue {
    fn from(value: serde_json::Value) -> Self {
        MetaValue::Structured(value)
    }
}

/// Free-form key/value properties attached to a log record.
///
/// Keys are unique. The map is ordered by key, so dumps are deterministic
/// regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    entries: BTreeMap<String, MetaValue>,
}

impl Metadata {
    /// Create a new empty metadata map
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add an entry (builder form)
    pub fn with_entry<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetaValue>,
    {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Add an entry, replacing any previous value under the same key
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<MetaValue>,
    {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    /// Presence check; the value is irrelevant
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetaValue)> {
        self.entries.iter()
    }

    /// Render the whole map into an output buffer: entries in ascending key
    /// order, each as `key ++ intersep ++ value`, joined by `fieldsep`.
    pub fn dump_into(&self, intersep: &str, fieldsep: &str, out: &mut Vec<u8>) {
        let mut first = true;
        for (key, value) in &self.entries {
            if !first {
                out.extend_from_slice(fieldsep.as_bytes());
            }
            first = false;
            out.extend_from_slice(key.as_bytes());
            out.extend_from_slice(intersep.as_bytes());
            value.render_into(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(value: &MetaValue) -> String {
        let mut out = Vec::new();
        value.render_into(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_metadata_creation() {
        let metadata = Metadata::new();
        assert!(metadata.is_empty());
        assert_eq!(metadata.len(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let metadata = Metadata::new()
            .with_entry("user_id", 123)
            .with_entry("username", "john_doe")
            .with_entry("active", true);

        assert_eq!(metadata.len(), 3);
        assert!(metadata.contains("user_id"));
        assert_eq!(metadata.get("active"), Some(&MetaValue::Bool(true)));
        assert_eq!(metadata.get("missing"), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut metadata = Metadata::new();
        metadata.insert("key", "first");
        metadata.insert("key", "second");
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("key"), Some(&MetaValue::Str("second".into())));
    }

    #[test]
    fn test_value_rendering() {
        assert_eq!(rendered(&MetaValue::from("text")), "text");
        assert_eq!(rendered(&MetaValue::from(42)), "42");
        assert_eq!(rendered(&MetaValue::from(2.5)), "2.5");
        assert_eq!(rendered(&MetaValue::from(false)), "false");
        assert_eq!(rendered(&MetaValue::symbol("hello")), "hello");
        assert_eq!(rendered(&MetaValue::from(b"raw".to_vec())), "raw");
    }

    #[test]
    fn test_structured_rendering_is_lossless() {
        let value = MetaValue::from(serde_json::json!({"a": [1, 2], "b": "x"}));
        assert_eq!(rendered(&value), r#"{"a":[1,2],"b":"x"}"#);
    }

    #[test]
    fn test_display_matches_rendering_for_text() {
        let value = MetaValue::symbol("api");
        assert_eq!(value.to_string(), rendered(&value));
    }

    #[test]
    fn test_iter_is_key_ordered() {
        let metadata = Metadata::new()
            .with_entry("zeta", 1)
            .with_entry("alpha", 2);

        let keys: Vec<&str> = metadata.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["alpha", "zeta"]);
    }

    #[test]
    fn test_dump_sorted_by_key() {
        let metadata = Metadata::new()
            .with_entry("foo", 1)
            .with_entry("bar", 2)
            .with_entry("baz", 3);

        let mut out = Vec::new();
        metadata.dump_into("=", " ", &mut out);
        assert_eq!(String::from_utf8(out).unwrap(), "bar=2 baz=3 foo=1");
    }

    #[test]
    fn test_dump_custom_separators() {
        let metadata = Metadata::new()
            .with_entry("foo", 1)
            .with_entry("bar", 2)
            .with_entry("baz", 3);

        let mut out = Vec::new();
        metadata.dump_into("->", ", ", &mut out);
        assert_eq!(String::from_utf8(out).unwrap(), "bar->2, baz->3, foo->1");
    }

    #[test]
    fn test_dump_empty_is_empty() {
        let mut out = Vec::new();
        Metadata::new().dump_into("=", " ", &mut out);
        assert!(out.is_empty());
    }
}
