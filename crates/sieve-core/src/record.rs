//! Structured-mode record and its path-prefixed flattening.
//!
//! A [`Record`] is a plain value tree (scalars, lists, ordered maps) holding
//! only extracted strings. [`flatten`] walks it depth-first, accumulating one
//! `[KEY]` segment per map key, and emits `"<prefix> <value>"` at every scalar
//! leaf. Lists flatten each element under the prefix they were found at.
//!
//! ```text
//! { "links": [ { "text": "x", "href": "y" } ] }
//!
//! [LINKS][TEXT] x
//! [LINKS][HREF] y
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::enums::EmptyPolicy;
use crate::units::EMPTY;

/// A nested value built from selected document facets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Scalar(String),
    List(Vec<Record>),
    Map(RecordMap),
}

/// Insertion-ordered string-keyed map of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordMap(Vec<(String, Record)>);

impl RecordMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry, keeping insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Record>) {
        self.0.push((key.into(), value.into()));
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Record>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Record {
    /// Whether the value counts as empty: a blank string, an empty list or an empty map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&RecordMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key when this record is a map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map().and_then(|map| map.get(key))
    }
}

impl From<String> for Record {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for Record {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<RecordMap> for Record {
    fn from(value: RecordMap) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Record>> From<Vec<T>> for Record {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl Serialize for RecordMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
            Self::Map(map) => map.serialize(serializer),
        }
    }
}

/// Flatten a record into `[PATH] value` lines in depth-first order.
///
/// Under [`EmptyPolicy::Omit`] empty values produce no line at all; under
/// [`EmptyPolicy::Placeholder`] they produce one line carrying `<EMPTY>`.
#[must_use]
pub fn flatten(record: &Record, policy: EmptyPolicy) -> Vec<String> {
    let mut lines = Vec::new();
    walk(record, "", policy, &mut lines);
    lines
}

/// [`flatten`] joined with `\n`.
#[must_use]
pub fn flatten_to_text(record: &Record, policy: EmptyPolicy) -> String {
    flatten(record, policy).join("\n")
}

fn walk(record: &Record, prefix: &str, policy: EmptyPolicy, lines: &mut Vec<String>) {
    if record.is_empty() {
        if policy == EmptyPolicy::Placeholder {
            push_line(prefix, EMPTY, lines);
        }
        return;
    }

    match record {
        Record::Scalar(value) => push_line(prefix, value.trim(), lines),
        Record::List(items) => {
            for item in items {
                walk(item, prefix, policy, lines);
            }
        }
        Record::Map(map) => {
            for (key, value) in map.iter() {
                let child = format!("{prefix}[{}]", key.to_uppercase());
                walk(value, &child, policy, lines);
            }
        }
    }
}

fn push_line(prefix: &str, value: &str, lines: &mut Vec<String>) {
    let line = format!("{prefix} {value}");
    lines.push(line.trim().to_string());
}
