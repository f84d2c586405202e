//! Structured-mode record builder.
//!
//! Collects a fixed set of document facets into an ordered [`Record`]. Each
//! facet is a query over the whole tree; the facets are independent of each
//! other and always appear under the same keys in the same order, empty or
//! not. Element text is normalised and lowercased. Attribute values are
//! whitespace-normalised but keep their case, except for `meta` values and
//! image `alt`/`title`, which are lowercased.

use sieve_core::text::{normalize, normalize_lower};
use sieve_core::{Record, RecordMap};

use crate::order::DocumentOrder;
use crate::tree::{Document, NodeId};

/// Class tokens that mark a `div`/`span` as an important section.
pub const IMPORTANT_CLASSES: [&str; 12] = [
    "login",
    "header",
    "footer",
    "nav",
    "main",
    "content",
    "form",
    "input",
    "btn",
    "button",
    "card",
    "container",
];

/// Top-level keys, in output order.
pub const RECORD_KEYS: [&str; 15] = [
    "title",
    "headings",
    "paragraphs",
    "links",
    "forms",
    "lists",
    "footer",
    "iframes",
    "meta",
    "maps",
    "labels",
    "images",
    "tables",
    "selects",
    "important_sections",
];

const HEADING_TAGS: [&str; 3] = ["h1", "h2", "h3"];
const META_ATTRIBUTES: [&str; 4] = ["name", "property", "http-equiv", "content"];

/// Build the structured record of `doc`.
#[must_use]
pub fn build_record(doc: &Document) -> Record {
    let order = DocumentOrder::build(doc);
    let root = doc.root();

    RecordMap::new()
        .with("title", first_text(doc, "title"))
        .with("headings", headings(doc))
        .with("paragraphs", paragraphs(doc))
        .with("links", links(doc))
        .with("forms", forms(doc, &order))
        .with("lists", lists(doc))
        .with("footer", first_text(doc, "footer"))
        .with("iframes", each(doc, root, "iframe", |id| {
            RecordMap::new()
                .with("src", attr(doc, id, "src"))
                .with("text", text(doc, id))
        }))
        .with("meta", meta(doc))
        .with("maps", maps(doc))
        .with("labels", each(doc, root, "label", |id| {
            RecordMap::new()
                .with("for", attr(doc, id, "for"))
                .with("text", text(doc, id))
        }))
        .with("images", each(doc, root, "img", |id| {
            RecordMap::new()
                .with("src", attr(doc, id, "src"))
                .with("alt", attr(doc, id, "alt").to_lowercase())
                .with("title", attr(doc, id, "title").to_lowercase())
        }))
        .with("tables", tables(doc))
        .with("selects", selects(doc))
        .with("important_sections", important_sections(doc))
        .into()
}

fn text(doc: &Document, id: NodeId) -> String {
    normalize_lower(&doc.text_of(id))
}

fn attr(doc: &Document, id: NodeId, name: &str) -> String {
    doc.attr(id, name).map(normalize).unwrap_or_default()
}

/// Map every `tag` element below `scope` through `build`.
fn each<F>(doc: &Document, scope: NodeId, tag: &str, build: F) -> Vec<Record>
where
    F: Fn(NodeId) -> RecordMap,
{
    doc.find_all(scope, &[tag])
        .map(|id| Record::from(build(id)))
        .collect()
}

fn first_text(doc: &Document, tag: &str) -> String {
    doc.find_first(doc.root(), tag)
        .map(|id| text(doc, id))
        .unwrap_or_default()
}

/// All `h1` first, then `h2`, then `h3`; blank headings are skipped.
fn headings(doc: &Document) -> Vec<Record> {
    HEADING_TAGS
        .iter()
        .flat_map(|&level| {
            doc.find_all(doc.root(), &[level])
                .map(|id| text(doc, id))
                .filter(|t| !t.is_empty())
                .map(move |t| Record::from(RecordMap::new().with(level, t)))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn paragraphs(doc: &Document) -> Vec<String> {
    doc.find_all(doc.root(), &["p"])
        .map(|id| text(doc, id))
        .filter(|t| !t.is_empty())
        .collect()
}

fn links(doc: &Document) -> Vec<Record> {
    each(doc, doc.root(), "a", |id| {
        RecordMap::new()
            .with("text", text(doc, id))
            .with("href", attr(doc, id, "href"))
    })
}

fn forms(doc: &Document, order: &DocumentOrder) -> Vec<Record> {
    each(doc, doc.root(), "form", |form| {
        let inputs = each(doc, form, "input", |input| {
            let input_type = attr(doc, input, "type");
            let label = if input_type == "checkbox" {
                order
                    .next_with_tag(input, "label")
                    .map(|label| text(doc, label))
                    .unwrap_or_default()
            } else {
                String::new()
            };
            RecordMap::new()
                .with("type", input_type)
                .with("name", attr(doc, input, "name"))
                .with("placeholder", attr(doc, input, "placeholder"))
                .with("label", label)
        });
        let buttons = each(doc, form, "button", |button| {
            RecordMap::new()
                .with("text", text(doc, button))
                .with("type", attr(doc, button, "type"))
                .with("id", attr(doc, button, "id"))
                .with("class", class_tokens(doc, button).join(" "))
        });
        RecordMap::new()
            .with("inputs", inputs)
            .with("buttons", buttons)
    })
}

/// `ul`/`ol` with their non-empty `li` texts; lists without items are skipped.
fn lists(doc: &Document) -> Vec<Record> {
    doc.find_all(doc.root(), &["ul", "ol"])
        .filter_map(|list| {
            let items: Vec<String> = doc
                .find_all(list, &["li"])
                .map(|li| text(doc, li))
                .filter(|t| !t.is_empty())
                .collect();
            if items.is_empty() {
                return None;
            }
            let list_type = doc.tag(list).unwrap_or_default();
            Some(Record::from(
                RecordMap::new().with("type", list_type).with("items", items),
            ))
        })
        .collect()
}

/// One entry per `meta` carrying at least one non-empty known attribute.
fn meta(doc: &Document) -> Vec<Record> {
    doc.find_all(doc.root(), &["meta"])
        .filter_map(|id| {
            let mut entry = RecordMap::new();
            for name in META_ATTRIBUTES {
                let value = normalize_lower(doc.attr(id, name).unwrap_or_default());
                if !value.is_empty() {
                    entry.insert(name, value);
                }
            }
            (!entry.is_empty()).then(|| Record::from(entry))
        })
        .collect()
}

fn maps(doc: &Document) -> Vec<Record> {
    each(doc, doc.root(), "map", |map| {
        let areas = each(doc, map, "area", |area| {
            RecordMap::new()
                .with("href", attr(doc, area, "href"))
                .with("alt", attr(doc, area, "alt"))
                .with("coords", attr(doc, area, "coords"))
        });
        RecordMap::new()
            .with("name", attr(doc, map, "name"))
            .with("areas", areas)
    })
}

/// Rows of cell texts; rows without cells are skipped.
fn tables(doc: &Document) -> Vec<Record> {
    each(doc, doc.root(), "table", |table| {
        let rows: Vec<Record> = doc
            .find_all(table, &["tr"])
            .filter_map(|tr| {
                let cells: Vec<String> = doc
                    .find_all(tr, &["th", "td"])
                    .map(|cell| text(doc, cell))
                    .collect();
                (!cells.is_empty()).then(|| Record::from(cells))
            })
            .collect();
        RecordMap::new().with("rows", rows)
    })
}

fn selects(doc: &Document) -> Vec<Record> {
    each(doc, doc.root(), "select", |select| {
        let options = each(doc, select, "option", |option| {
            RecordMap::new()
                .with("value", attr(doc, option, "value"))
                .with("text", text(doc, option))
        });
        RecordMap::new()
            .with("name", attr(doc, select, "name"))
            .with("options", options)
    })
}

fn important_sections(doc: &Document) -> Vec<Record> {
    doc.find_all(doc.root(), &["div", "span"])
        .filter_map(|id| {
            let classes = class_tokens(doc, id);
            let important = classes
                .iter()
                .any(|c| IMPORTANT_CLASSES.contains(&c.to_lowercase().as_str()));
            if !important {
                return None;
            }
            let tag = doc.tag(id).unwrap_or_default();
            Some(Record::from(
                RecordMap::new()
                    .with("tag", tag)
                    .with("class", classes)
                    .with("text", text(doc, id)),
            ))
        })
        .collect()
}

fn class_tokens(doc: &Document, id: NodeId) -> Vec<String> {
    doc.attr(id, "class")
        .map(|class| class.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}
