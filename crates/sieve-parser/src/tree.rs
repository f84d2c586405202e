//! Arena-backed, immutable document tree.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. Every walk
//! over the tree uses an explicit stack, so depth is bounded by memory rather
//! than by the call stack. Tag and attribute names are lowercased when the
//! tree is built; attribute values are kept as written (after entity
//! decoding). Adjacent text under one parent is always a single node.

use sieve_core::text::normalize;

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One `name="value"` pair. Valueless attributes carry an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The synthetic root every top-level node hangs off.
    Document,
    Element {
        tag: String,
        attributes: Vec<Attribute>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
pub struct NodeData {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// A parsed document. Built once through [`TreeBuilder`], read-only afterwards.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, the root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document always holds its root, so it is empty when nothing else was parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Tag name when `id` is an element.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    #[must_use]
    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        match &self.nodes[id.0].kind {
            NodeKind::Element { attributes, .. } => attributes,
            _ => &[],
        }
    }

    /// Value of the attribute `name` (lowercase) on element `id`.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attributes(id)
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Pre-order walk over every node below `id`, `id` itself excluded.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = self.nodes[id.0].children.iter().rev().copied().collect();
        Descendants { doc: self, stack }
    }

    /// Pre-order walk over the whole document, the root excluded.
    #[must_use]
    pub fn preorder(&self) -> Descendants<'_> {
        self.descendants(self.root())
    }

    /// Elements below `id` whose tag is one of `tags`, in document order.
    pub fn find_all<'a>(
        &'a self,
        id: NodeId,
        tags: &'a [&'a str],
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(id)
            .filter(move |&node| self.tag(node).is_some_and(|tag| tags.contains(&tag)))
    }

    /// First element below `id` named `tag`.
    #[must_use]
    pub fn find_first(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(id).find(|&node| self.tag(node) == Some(tag))
    }

    /// Raw text nodes below `id`, in document order.
    pub fn text_nodes(&self, id: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.descendants(id)
            .filter_map(|node| match &self.nodes[node.0].kind {
                NodeKind::Text(text) => Some(text.as_str()),
                _ => None,
            })
    }

    /// All descendant text of `id`, concatenated in document order and then
    /// normalised. No separator is inserted between text nodes, so
    /// `<b>AT</b>&amp;T` reads `AT&T`.
    #[must_use]
    pub fn text_of(&self, id: NodeId) -> String {
        if let NodeKind::Text(text) = &self.nodes[id.0].kind {
            return normalize(text);
        }
        let joined: String = self.text_nodes(id).collect();
        normalize(&joined)
    }
}

/// Explicit-stack pre-order iterator returned by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.nodes[id.0].children.iter().rev().copied());
        Some(id)
    }
}

/// Appends nodes in document order and hands back the finished [`Document`].
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append an element under `parent`. Tag and attribute names are lowercased;
    /// when an attribute name repeats, the first occurrence wins.
    pub fn element(&mut self, parent: NodeId, tag: &str, attributes: Vec<Attribute>) -> NodeId {
        let mut deduped: Vec<Attribute> = Vec::with_capacity(attributes.len());
        for mut attr in attributes {
            attr.name.make_ascii_lowercase();
            if !deduped.iter().any(|seen| seen.name == attr.name) {
                deduped.push(attr);
            }
        }
        self.push(
            parent,
            NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
                attributes: deduped,
            },
        )
    }

    /// Append text under `parent`. Empty text is dropped; text that directly
    /// follows another text node of the same parent is merged into it.
    pub fn text(&mut self, parent: NodeId, content: impl AsRef<str>) -> Option<NodeId> {
        let content = content.as_ref();
        if content.is_empty() {
            return None;
        }
        if let Some(&last) = self.nodes[parent.0].children.last() {
            if let NodeKind::Text(existing) = &mut self.nodes[last.0].kind {
                existing.push_str(content);
                return Some(last);
            }
        }
        Some(self.push(parent, NodeKind::Text(content.to_string())))
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    #[must_use]
    pub fn finish(self) -> Document {
        Document { nodes: self.nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Document {
        // <div class="card"><p>Hello <b>big</b></p><p>world</p></div><span>tail</span>
        let mut b = TreeBuilder::new();
        let root = b.root();
        let div = b.element(root, "DIV", vec![Attribute::new("Class", "card")]);
        let p1 = b.element(div, "p", Vec::new());
        b.text(p1, "Hello ");
        let bold = b.element(p1, "b", Vec::new());
        b.text(bold, "big");
        let p2 = b.element(div, "p", Vec::new());
        b.text(p2, "world");
        let span = b.element(root, "span", Vec::new());
        b.text(span, "tail");
        b.finish()
    }

    fn tags(doc: &Document, ids: impl Iterator<Item = NodeId>) -> Vec<String> {
        ids.filter_map(|id| doc.tag(id).map(str::to_string)).collect()
    }

    #[test]
    fn names_are_lowercased_at_build_time() {
        let doc = sample();
        let div = doc.children(doc.root())[0];
        assert_eq!(doc.tag(div), Some("div"));
        assert_eq!(doc.attr(div, "class"), Some("card"));
        assert_eq!(doc.attr(div, "Class"), None);
    }

    #[test]
    fn preorder_visits_parents_before_children() {
        let doc = sample();
        assert_eq!(tags(&doc, doc.preorder()), vec!["div", "p", "b", "p", "span"]);
    }

    #[test]
    fn text_of_concatenates_descendant_text() {
        let doc = sample();
        let div = doc.children(doc.root())[0];
        assert_eq!(doc.text_of(div), "Hello bigworld");
        assert_eq!(doc.text_of(doc.root()), "Hello bigworldtail");
    }

    #[test]
    fn adjacent_text_merges_into_one_node() {
        let mut b = TreeBuilder::new();
        let root = b.root();
        let a = b.element(root, "a", Vec::new());
        let first = b.text(a, "AT");
        let second = b.text(a, "&");
        b.text(a, "T");
        let doc = b.finish();
        assert_eq!(first, second);
        assert_eq!(doc.children(a).len(), 1);
        assert_eq!(doc.text_of(a), "AT&T");
    }

    #[test]
    fn find_all_and_find_first_respect_document_order() {
        let doc = sample();
        let found: Vec<_> = doc.find_all(doc.root(), &["span", "p"]).collect();
        assert_eq!(tags(&doc, found.into_iter()), vec!["p", "p", "span"]);
        let first = doc.find_first(doc.root(), "p").unwrap();
        assert_eq!(doc.text_of(first), "Hello big");
    }

    #[test]
    fn duplicate_attributes_keep_the_first() {
        let mut b = TreeBuilder::new();
        let root = b.root();
        let a = b.element(
            root,
            "a",
            vec![Attribute::new("href", "/one"), Attribute::new("HREF", "/two")],
        );
        let doc = b.finish();
        assert_eq!(doc.attributes(a).len(), 1);
        assert_eq!(doc.attr(a, "href"), Some("/one"));
    }

    #[test]
    fn empty_text_is_not_stored() {
        let mut b = TreeBuilder::new();
        let root = b.root();
        assert!(b.text(root, "").is_none());
        let doc = b.finish();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn deep_trees_do_not_exhaust_the_call_stack() {
        let mut b = TreeBuilder::new();
        let mut parent = b.root();
        for _ in 0..200_000 {
            parent = b.element(parent, "div", Vec::new());
        }
        b.text(parent, "bottom");
        let doc = b.finish();
        assert_eq!(doc.preorder().count(), 200_001);
        assert_eq!(doc.text_of(doc.root()), "bottom");
    }
}
