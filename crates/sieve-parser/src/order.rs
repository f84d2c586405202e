//! Document-order index.
//!
//! A flat list of every element in the order a pre-order walk reaches them,
//! plus per-tag position lists. "Next element named X after this one" is then
//! a binary search over X's positions instead of a fresh walk, whatever the
//! ancestry of the two elements.

use std::collections::HashMap;

use crate::tree::{Document, NodeId};

#[derive(Debug, Clone)]
pub struct DocumentOrder {
    elements: Vec<NodeId>,
    /// Node index -> position in `elements`; `None` for non-element nodes.
    positions: Vec<Option<usize>>,
    by_tag: HashMap<String, Vec<usize>>,
}

impl DocumentOrder {
    /// Index every element of `doc`.
    #[must_use]
    pub fn build(doc: &Document) -> Self {
        let mut elements = Vec::new();
        let mut positions = vec![None; doc.len()];
        let mut by_tag: HashMap<String, Vec<usize>> = HashMap::new();

        for id in doc.preorder() {
            let Some(tag) = doc.tag(id) else {
                continue;
            };
            let position = elements.len();
            elements.push(id);
            positions[id.index()] = Some(position);
            by_tag.entry(tag.to_string()).or_default().push(position);
        }

        Self {
            elements,
            positions,
            by_tag,
        }
    }

    /// Elements in document order.
    #[must_use]
    pub fn elements(&self) -> &[NodeId] {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Position of element `id`, or `None` if `id` is not an element.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.positions.get(id.index()).copied().flatten()
    }

    /// The first element named `tag` strictly after `id` in document order.
    #[must_use]
    pub fn next_with_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let position = self.position(id)?;
        let candidates = self.by_tag.get(tag)?;
        let next = candidates.partition_point(|&p| p <= position);
        candidates.get(next).map(|&p| self.elements[p])
    }
}
