//! # sieve-parser
//!
//! Tolerant HTML parsing and deterministic canonicalisation.
//!
//! Documents go through these stages:
//! - bytes are decoded (UTF-8, then Latin-1)
//! - html5ever's HTML5 tree builder parses the markup and resolves character
//!   references; it never rejects input, so malformed documents still produce
//!   a tree
//! - the DOM is copied into an arena [`Document`], dropping stripped
//!   subtrees, with lowercase tag and attribute names
//! - a [`DocumentOrder`] index answers "next element named X" lookups
//! - one of the [`extractors`] strategies reduces the document to text
//!
//! [`canonicalize`] runs the whole pipeline on a string.

pub mod decode;
pub mod error;
pub mod extractors;
pub mod order;
pub mod parser;
pub mod tree;

pub use decode::{Decoded, SourceEncoding, decode_bytes, read_document};
pub use error::ParserError;
pub use extractors::{
    CanonOptions, Canonicalizer, FlatLines, StructuredRecord, TextLines, canonicalize,
    canonicalize_bytes, canonicalize_document,
};
pub use order::DocumentOrder;
pub use parser::{ParseOptions, parse_dom, parse_html, parse_html_with};
pub use tree::{Attribute, Document, NodeId, NodeKind, TreeBuilder};
