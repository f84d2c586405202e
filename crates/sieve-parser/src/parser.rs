//! html5ever wrapper that turns HTML source into a [`Document`].
//!
//! The HTML5 tree builder never rejects input: stray `<`, unclosed or
//! misnested tags and truncated attributes are recovered the way a browser
//! recovers them, and character references are resolved against the full
//! named-reference table. The resulting DOM is copied into the arena tree
//! with an explicit stack. Comments, doctypes and processing instructions are
//! dropped; `<template>` contents are kept as ordinary children.

use std::rc::Rc;

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::tree::{Attribute, Document, NodeId, TreeBuilder};

/// Options applied while the tree is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Elements (lowercase tag names) dropped together with their subtree.
    pub strip_tags: Vec<String>,
}

impl ParseOptions {
    #[must_use]
    pub fn stripping<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strip_tags: tags
                .into_iter()
                .map(|t| t.into().to_ascii_lowercase())
                .collect(),
        }
    }

    fn strips(&self, tag: &str) -> bool {
        self.strip_tags.iter().any(|t| t == tag)
    }
}

/// Parse HTML source into an html5ever DOM.
///
/// Scripting is reported as disabled so that `<noscript>` content is parsed
/// as markup rather than as one opaque string.
#[must_use]
pub fn parse_dom(source: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(RcDom::default(), opts).one(source)
}

/// Parse HTML into a [`Document`] with nothing stripped.
#[must_use]
pub fn parse_html(source: &str) -> Document {
    parse_html_with(source, &ParseOptions::default())
}

/// Parse HTML into a [`Document`], honouring `options`.
#[must_use]
pub fn parse_html_with(source: &str, options: &ParseOptions) -> Document {
    let dom = parse_dom(source);
    let doc = build_document(&dom.document, options);
    tracing::trace!(nodes = doc.len(), "document built");
    doc
}

/// Copy an html5ever DOM into the arena tree, without recursion.
#[must_use]
pub fn build_document(root: &Handle, options: &ParseOptions) -> Document {
    let mut builder = TreeBuilder::new();
    let mut stack: Vec<(Handle, NodeId)> = Vec::new();
    push_children(&mut stack, root, builder.root());

    while let Some((handle, parent)) = stack.pop() {
        match &handle.data {
            NodeData::Element {
                name,
                attrs,
                template_contents,
                ..
            } => {
                let tag: &str = &name.local;
                if options.strips(tag) {
                    continue;
                }
                let attributes = attrs
                    .borrow()
                    .iter()
                    .map(|attr| Attribute::new(&*attr.name.local, &*attr.value))
                    .collect();
                let id = builder.element(parent, tag, attributes);
                // template children live in a separate fragment; they follow
                // any direct children, which html5ever never creates for it
                if let Some(contents) = template_contents.borrow().as_ref() {
                    push_children(&mut stack, contents, id);
                }
                push_children(&mut stack, &handle, id);
            }
            NodeData::Text { contents } => {
                builder.text(parent, &**contents.borrow());
            }
            NodeData::Document => push_children(&mut stack, &handle, parent),
            NodeData::Doctype { .. }
            | NodeData::Comment { .. }
            | NodeData::ProcessingInstruction { .. } => {}
        }
    }

    builder.finish()
}

/// Queue the children of `handle` so that they pop in source order.
fn push_children(stack: &mut Vec<(Handle, NodeId)>, handle: &Handle, parent: NodeId) {
    stack.extend(
        handle
            .children
            .borrow()
            .iter()
            .rev()
            .map(|child| (Rc::clone(child), parent)),
    );
}
