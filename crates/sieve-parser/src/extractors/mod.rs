//! Canonicalisation strategies.
//!
//! Three strategies turn a [`Document`] into text, all behind
//! [`Canonicalizer`]:
//! - [`flat`]: one `TAG: { field: "value" }` line per recognised element
//! - [`structured`]: a nested [`Record`](sieve_core::Record) of selected
//!   facets, flattened to `[PATH] value` lines
//! - [`text`]: every non-empty text node, one per line
//!
//! Which one runs, and which subtrees are stripped before it runs, is decided
//! by [`CanonOptions`].

pub mod flat;
pub mod structured;
pub mod text;

use sieve_core::{EmptyPolicy, Mode};

use crate::decode::decode_bytes;
use crate::error::ParserError;
use crate::parser::{ParseOptions, parse_html_with};
use crate::tree::Document;

/// A strategy that reduces a parsed document to canonical text.
pub trait Canonicalizer {
    fn canonicalize(&self, doc: &Document) -> String;
}

/// Flat per-element lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatLines;

impl Canonicalizer for FlatLines {
    fn canonicalize(&self, doc: &Document) -> String {
        sieve_core::render_units(&flat::extract_units(doc))
    }
}

/// Structured record, flattened under an empty-value policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredRecord {
    pub empty_policy: EmptyPolicy,
}

impl Canonicalizer for StructuredRecord {
    fn canonicalize(&self, doc: &Document) -> String {
        sieve_core::flatten_to_text(&structured::build_record(doc), self.empty_policy)
    }
}

/// Plain text lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextLines;

impl Canonicalizer for TextLines {
    fn canonicalize(&self, doc: &Document) -> String {
        text::extract_lines(doc).join("\n")
    }
}

/// Everything that decides how a document is canonicalised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonOptions {
    pub mode: Mode,
    /// Only consulted by [`Mode::Structured`].
    pub empty_policy: EmptyPolicy,
    /// `None` means the mode's default strip list.
    pub strip_tags: Option<Vec<String>>,
}

impl CanonOptions {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_empty_policy(mut self, empty_policy: EmptyPolicy) -> Self {
        self.empty_policy = empty_policy;
        self
    }

    #[must_use]
    pub fn with_strip_tags(mut self, strip_tags: Vec<String>) -> Self {
        self.strip_tags = Some(strip_tags);
        self
    }

    /// Parser options carrying the effective strip list.
    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        match &self.strip_tags {
            Some(tags) => ParseOptions::stripping(tags.iter().map(String::as_str)),
            None => ParseOptions::stripping(self.mode.default_strip_tags().iter().copied()),
        }
    }

    /// The strategy selected by `mode`.
    #[must_use]
    pub fn canonicalizer(&self) -> Box<dyn Canonicalizer> {
        match self.mode {
            Mode::Flat => Box::new(FlatLines),
            Mode::Structured => Box::new(StructuredRecord {
                empty_policy: self.empty_policy,
            }),
            Mode::Text => Box::new(TextLines),
        }
    }
}

/// Parse `source` and canonicalise it.
#[must_use]
pub fn canonicalize(source: &str, options: &CanonOptions) -> String {
    let doc = parse_html_with(source, &options.parse_options());
    canonicalize_document(&doc, options)
}

/// Canonicalise an already parsed document. Stripping happened at parse
/// time, so `options.strip_tags` is not consulted here.
#[must_use]
pub fn canonicalize_document(doc: &Document, options: &CanonOptions) -> String {
    options.canonicalizer().canonicalize(doc)
}

/// Decode, parse and canonicalise raw document bytes.
///
/// # Errors
/// Returns `ParserError::Decode` when the bytes are neither UTF-8 nor Latin-1.
pub fn canonicalize_bytes(bytes: &[u8], options: &CanonOptions) -> Result<String, ParserError> {
    let decoded = decode_bytes(bytes)?;
    tracing::trace!(encoding = %decoded.encoding, mode = %options.mode, "canonicalizing document");
    Ok(canonicalize(&decoded.text, options))
}
