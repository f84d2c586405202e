//! Plain-text extraction.
//!
//! Every text node is split into lines, each line is normalised, and blank
//! lines are dropped. Text nodes never split inside a run of character data,
//! so `Tom &amp; Jerry` stays on one line while text in sibling elements
//! lands on separate lines.

use sieve_core::text::normalize;

use crate::tree::Document;

/// Every non-empty normalised text line of `doc`, in document order.
#[must_use]
pub fn extract_lines(doc: &Document) -> Vec<String> {
    doc.text_nodes(doc.root())
        .flat_map(str::lines)
        .map(normalize)
        .filter(|line| !line.is_empty())
        .collect()
}
