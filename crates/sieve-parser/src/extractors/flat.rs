//! Flat-mode extraction.
//!
//! Walks the document once in pre-order and emits one [`OutputUnit`] per
//! element whose tag is in [`RecognizedTag`]. Every element is visited,
//! matched or not, so a recognised element nested inside another still gets
//! its own line. Text fields are the element's whole descendant text,
//! normalised; attribute values are normalised too so that each unit stays on
//! one line.
//!
//! Checkboxes are bound to the first `<label>` after them in document order,
//! found through the [`DocumentOrder`] index rather than a fresh walk.

use sieve_core::text::normalize;
use sieve_core::{InputFields, OutputUnit, TextKind};

use crate::order::DocumentOrder;
use crate::tree::{Document, NodeId};

/// The closed set of tags that produce a flat-mode line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizedTag {
    Anchor,
    Form,
    Label,
    Input,
    Button,
    Iframe,
    Script,
    Meta,
    Image,
    Text(TextKind),
}

impl RecognizedTag {
    pub const ALL: [Self; 16] = [
        Self::Anchor,
        Self::Form,
        Self::Label,
        Self::Input,
        Self::Button,
        Self::Iframe,
        Self::Script,
        Self::Meta,
        Self::Image,
        Self::Text(TextKind::Paragraph),
        Self::Text(TextKind::UnorderedList),
        Self::Text(TextKind::OrderedList),
        Self::Text(TextKind::ListItem),
        Self::Text(TextKind::Header),
        Self::Text(TextKind::NoScript),
        Self::Text(TextKind::Title),
    ];

    /// Look up a lowercase tag name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "a" => Some(Self::Anchor),
            "form" => Some(Self::Form),
            "label" => Some(Self::Label),
            "input" => Some(Self::Input),
            "button" => Some(Self::Button),
            "iframe" => Some(Self::Iframe),
            "script" => Some(Self::Script),
            "meta" => Some(Self::Meta),
            "img" => Some(Self::Image),
            other => TextKind::from_tag(other).map(Self::Text),
        }
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Anchor => "a",
            Self::Form => "form",
            Self::Label => "label",
            Self::Input => "input",
            Self::Button => "button",
            Self::Iframe => "iframe",
            Self::Script => "script",
            Self::Meta => "meta",
            Self::Image => "img",
            Self::Text(kind) => kind.tag(),
        }
    }
}

/// Emit the flat-mode units of `doc` in document order.
#[must_use]
pub fn extract_units(doc: &Document) -> Vec<OutputUnit> {
    let order = DocumentOrder::build(doc);
    let units: Vec<_> = order
        .elements()
        .iter()
        .filter_map(|&id| {
            let tag = RecognizedTag::from_tag(doc.tag(id)?)?;
            Some(emit(doc, &order, id, tag))
        })
        .collect();
    tracing::debug!(elements = order.len(), units = units.len(), "flat extraction done");
    units
}

/// Build the unit for one recognised element.
fn emit(doc: &Document, order: &DocumentOrder, id: NodeId, tag: RecognizedTag) -> OutputUnit {
    match tag {
        RecognizedTag::Anchor => OutputUnit::link(doc.text_of(id), attr(doc, id, "href")),
        RecognizedTag::Form => OutputUnit::form(attr(doc, id, "action"), attr(doc, id, "method")),
        RecognizedTag::Label => OutputUnit::label(attr(doc, id, "for"), doc.text_of(id)),
        RecognizedTag::Input => emit_input(doc, order, id),
        RecognizedTag::Button => OutputUnit::button(doc.text_of(id)),
        RecognizedTag::Iframe => OutputUnit::iframe(attr(doc, id, "src")),
        RecognizedTag::Script => OutputUnit::script(attr(doc, id, "src")),
        RecognizedTag::Meta => {
            let name = attr(doc, id, "name")
                .filter(|name| !name.is_empty())
                .or_else(|| attr(doc, id, "property"));
            OutputUnit::meta(name, attr(doc, id, "content"))
        }
        RecognizedTag::Image => OutputUnit::image(attr(doc, id, "src"), attr(doc, id, "alt")),
        RecognizedTag::Text(kind) => OutputUnit::text_block(kind, doc.text_of(id)),
    }
}

fn emit_input(doc: &Document, order: &DocumentOrder, id: NodeId) -> OutputUnit {
    let input_type = attr(doc, id, "type").unwrap_or_default();
    let name = attr(doc, id, "name").unwrap_or_default();
    let placeholder = attr(doc, id, "placeholder").unwrap_or_default();

    if input_type == "checkbox" {
        let label = order
            .next_with_tag(id, "label")
            .map(|label| doc.text_of(label));
        return OutputUnit::checkbox(label, name, placeholder);
    }

    OutputUnit::input(InputFields {
        input_type,
        name,
        placeholder,
    })
}

/// Attribute value with whitespace normalised, `None` when absent.
fn attr(doc: &Document, id: NodeId, name: &str) -> Option<String> {
    doc.attr(id, name).map(normalize)
}

#[cfg(test)]
mod tests;
