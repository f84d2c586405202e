//! Canonicalisation modes, empty-value policies and text block kinds.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so configuration files and JSON summaries share one spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Which canonicalisation strategy turns a document into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One `TAG: { field: "value" }` line per recognised element.
    #[default]
    Flat,
    /// Nested record of document facets, flattened to `[PATH] value` lines.
    Structured,
    /// Every non-empty text node, one per line.
    Text,
}

impl Mode {
    pub const ALL: [Self; 3] = [Self::Flat, Self::Structured, Self::Text];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Structured => "structured",
            Self::Text => "text",
        }
    }

    /// Element names removed (with their subtrees) before traversal when the
    /// configuration does not override the list.
    #[must_use]
    pub const fn default_strip_tags(self) -> &'static [&'static str] {
        match self {
            Self::Flat | Self::Text => &["style"],
            Self::Structured => &["script", "style"],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "mode",
                value: s.to_string(),
                expected: "flat, structured, text",
            })
    }
}

// ---------------------------------------------------------------------------
// EmptyPolicy
// ---------------------------------------------------------------------------

/// What the structured serializer does with empty leaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPolicy {
    /// Skip empty strings, lists and maps entirely.
    #[default]
    Omit,
    /// Emit the `<EMPTY>` sentinel where an empty value would have been.
    Placeholder,
}

impl EmptyPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Omit => "omit",
            Self::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for EmptyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmptyPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "omit" => Ok(Self::Omit),
            "placeholder" => Ok(Self::Placeholder),
            _ => Err(CoreError::UnknownVariant {
                kind: "empty policy",
                value: s.to_string(),
                expected: "omit, placeholder",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TextKind
// ---------------------------------------------------------------------------

/// Elements whose only emitted field is their aggregated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    Paragraph,
    UnorderedList,
    OrderedList,
    ListItem,
    Header,
    NoScript,
    Title,
}

impl TextKind {
    pub const ALL: [Self; 7] = [
        Self::Paragraph,
        Self::UnorderedList,
        Self::OrderedList,
        Self::ListItem,
        Self::Header,
        Self::NoScript,
        Self::Title,
    ];

    /// Map a lowercase tag name to its text block kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "p" => Some(Self::Paragraph),
            "ul" => Some(Self::UnorderedList),
            "ol" => Some(Self::OrderedList),
            "li" => Some(Self::ListItem),
            "header" => Some(Self::Header),
            "noscript" => Some(Self::NoScript),
            "title" => Some(Self::Title),
            _ => None,
        }
    }

    /// The tag name this kind was produced from.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
            Self::ListItem => "li",
            Self::Header => "header",
            Self::NoScript => "noscript",
            Self::Title => "title",
        }
    }

    /// The uppercase line label, e.g. `P` or `NOSCRIPT`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paragraph => "P",
            Self::UnorderedList => "UL",
            Self::OrderedList => "OL",
            Self::ListItem => "LI",
            Self::Header => "HEADER",
            Self::NoScript => "NOSCRIPT",
            Self::Title => "TITLE",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
