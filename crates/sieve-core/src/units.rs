//! Flat-mode output units and their literal line shape.
//!
//! Each recognised element becomes exactly one [`OutputUnit`], rendered as
//!
//! ```text
//! TAG: { field: "value", field2: "value2" }
//! ```
//!
//! Field order is fixed per kind and absent values are always filled with a
//! default or a sentinel, so every kind renders with a constant number of
//! fields. Values are written verbatim between the quotes.

use std::fmt;

use crate::enums::TextKind;
use crate::text::or_placeholder;

/// Sentinel for blank text or a missing value that must not be left empty.
pub const EMPTY: &str = "<EMPTY>";

/// Default `href` for links without one.
pub const NO_URL: &str = "No URL provided";

/// Body of a `SCRIPT` line for scripts without a `src`.
pub const INLINE_SCRIPT: &str = "<SCRIPT INLINE>";

/// The `type`/`name`/`placeholder` triple shared by inputs and checkboxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFields {
    pub input_type: String,
    pub name: String,
    pub placeholder: String,
}

/// One emitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputUnit {
    Link { text: String, href: String },
    Form { action: String, method: String },
    Label { target: String, text: String },
    Input(InputFields),
    Checkbox { label: String, input: InputFields },
    Button { text: String },
    Iframe { src: String },
    Script { src: Option<String> },
    Meta { name: String, content: String },
    Image { src: String, alt: String },
    TextBlock { kind: TextKind, text: String },
}

impl OutputUnit {
    /// `<a>`: blank text becomes `<EMPTY>`, a missing `href` becomes `No URL provided`.
    #[must_use]
    pub fn link(text: String, href: Option<String>) -> Self {
        Self::Link {
            text: or_placeholder(text, EMPTY),
            href: href.unwrap_or_else(|| NO_URL.to_string()),
        }
    }

    #[must_use]
    pub fn form(action: Option<String>, method: Option<String>) -> Self {
        Self::Form {
            action: action.unwrap_or_default(),
            method: method.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn label(target: Option<String>, text: String) -> Self {
        Self::Label {
            target: target.unwrap_or_default(),
            text: or_placeholder(text, EMPTY),
        }
    }

    #[must_use]
    pub fn input(fields: InputFields) -> Self {
        Self::Input(fields)
    }

    /// A checkbox bound to the text of the next label in document order, if any.
    #[must_use]
    pub fn checkbox(label: Option<String>, name: String, placeholder: String) -> Self {
        Self::Checkbox {
            label: or_placeholder(label.unwrap_or_default(), EMPTY),
            input: InputFields {
                input_type: "checkbox".to_string(),
                name,
                placeholder,
            },
        }
    }

    #[must_use]
    pub fn button(text: String) -> Self {
        Self::Button {
            text: or_placeholder(text, EMPTY),
        }
    }

    #[must_use]
    pub fn iframe(src: Option<String>) -> Self {
        Self::Iframe {
            src: src.unwrap_or_default(),
        }
    }

    /// A script with an empty `src` counts as inline.
    #[must_use]
    pub fn script(src: Option<String>) -> Self {
        Self::Script {
            src: src.filter(|s| !s.is_empty()),
        }
    }

    #[must_use]
    pub fn meta(name: Option<String>, content: Option<String>) -> Self {
        Self::Meta {
            name: name.unwrap_or_default(),
            content: or_placeholder(content.unwrap_or_default(), EMPTY),
        }
    }

    #[must_use]
    pub fn image(src: Option<String>, alt: Option<String>) -> Self {
        Self::Image {
            src: src.unwrap_or_default(),
            alt: or_placeholder(alt.unwrap_or_default(), EMPTY),
        }
    }

    #[must_use]
    pub fn text_block(kind: TextKind, text: String) -> Self {
        Self::TextBlock {
            kind,
            text: or_placeholder(text, EMPTY),
        }
    }

    /// The uppercase label that starts the rendered line.
    #[must_use]
    pub const fn tag_label(&self) -> &'static str {
        match self {
            Self::Link { .. } => "LINK",
            Self::Form { .. } => "FORM",
            Self::Label { .. } => "LABEL",
            Self::Input(_) => "INPUT",
            Self::Checkbox { .. } => "CHECKBOX",
            Self::Button { .. } => "BUTTON",
            Self::Iframe { .. } => "IFRAME",
            Self::Script { .. } => "SCRIPT",
            Self::Meta { .. } => "META",
            Self::Image { .. } => "IMG",
            Self::TextBlock { kind, .. } => kind.label(),
        }
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[(&str, &str)]) -> fmt::Result {
    f.write_str("{ ")?;
    for (i, (name, value)) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{name}: \"{value}\"")?;
    }
    f.write_str(" }")
}

fn write_input(f: &mut fmt::Formatter<'_>, input: &InputFields) -> fmt::Result {
    write_fields(
        f,
        &[
            ("type", input.input_type.as_str()),
            ("name", input.name.as_str()),
            ("placeholder", input.placeholder.as_str()),
        ],
    )
}

impl fmt::Display for OutputUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.tag_label())?;
        match self {
            Self::Link { text, href } => {
                write_fields(f, &[("text", text.as_str()), ("href", href.as_str())])
            }
            Self::Form { action, method } => {
                write_fields(f, &[("action", action.as_str()), ("method", method.as_str())])
            }
            Self::Label { target, text } => {
                write_fields(f, &[("for", target.as_str()), ("text", text.as_str())])
            }
            Self::Input(input) => write_input(f, input),
            Self::Checkbox { label, input } => {
                write!(f, "{{ label: \"{label}\", input: ")?;
                write_input(f, input)?;
                f.write_str(" }")
            }
            Self::Button { text } | Self::TextBlock { text, .. } => {
                write_fields(f, &[("text", text.as_str())])
            }
            Self::Iframe { src } => write_fields(f, &[("src", src.as_str())]),
            Self::Script { src: Some(src) } => write_fields(f, &[("src", src.as_str())]),
            Self::Script { src: None } => write!(f, "{{ {INLINE_SCRIPT} }}"),
            Self::Meta { name, content } => {
                write_fields(f, &[("name", name.as_str()), ("content", content.as_str())])
            }
            Self::Image { src, alt } => {
                write_fields(f, &[("src", src.as_str()), ("alt", alt.as_str())])
            }
        }
    }
}

/// Render units one per line, in order, joined with `\n`.
#[must_use]
pub fn render_units(units: &[OutputUnit]) -> String {
    units
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn link_without_href_uses_default() {
        let unit = OutputUnit::link("click".to_string(), None);
        assert_eq!(
            unit.to_string(),
            r#"LINK: { text: "click", href: "No URL provided" }"#
        );
    }

    #[test]
    fn link_with_empty_href_keeps_it_empty() {
        let unit = OutputUnit::link(String::new(), Some(String::new()));
        assert_eq!(unit.to_string(), r#"LINK: { text: "<EMPTY>", href: "" }"#);
    }

    #[test]
    fn form_and_label_shapes() {
        assert_eq!(
            OutputUnit::form(Some("/login".into()), None).to_string(),
            r#"FORM: { action: "/login", method: "" }"#
        );
        assert_eq!(
            OutputUnit::label(Some("email".into()), String::new()).to_string(),
            r#"LABEL: { for: "email", text: "<EMPTY>" }"#
        );
    }

    #[test]
    fn input_keeps_all_three_fields() {
        let unit = OutputUnit::input(InputFields {
            input_type: "password".into(),
            name: "pw".into(),
            placeholder: String::new(),
        });
        assert_eq!(
            unit.to_string(),
            r#"INPUT: { type: "password", name: "pw", placeholder: "" }"#
        );
    }

    #[test]
    fn checkbox_braces_are_balanced() {
        let line = OutputUnit::checkbox(Some("Accept terms".into()), "agree".into(), String::new())
            .to_string();
        assert_eq!(
            line,
            r#"CHECKBOX: { label: "Accept terms", input: { type: "checkbox", name: "agree", placeholder: "" } }"#
        );
        assert_eq!(line.matches('{').count(), line.matches('}').count());
    }

    #[test]
    fn checkbox_without_label_uses_sentinel() {
        let unit = OutputUnit::checkbox(None, String::new(), String::new());
        assert!(unit.to_string().starts_with(r#"CHECKBOX: { label: "<EMPTY>""#));
    }

    #[test]
    fn iframe_quotes_are_closed() {
        assert_eq!(
            OutputUnit::iframe(Some("https://x.test".into())).to_string(),
            r#"IFRAME: { src: "https://x.test" }"#
        );
        assert_eq!(OutputUnit::iframe(None).to_string(), r#"IFRAME: { src: "" }"#);
    }

    #[test]
    fn script_inline_and_external() {
        assert_eq!(
            OutputUnit::script(Some("/app.js".into())).to_string(),
            r#"SCRIPT: { src: "/app.js" }"#
        );
        assert_eq!(
            OutputUnit::script(Some(String::new())).to_string(),
            "SCRIPT: { <SCRIPT INLINE> }"
        );
        assert_eq!(OutputUnit::script(None).to_string(), "SCRIPT: { <SCRIPT INLINE> }");
    }

    #[test]
    fn meta_and_image_sentinels() {
        assert_eq!(
            OutputUnit::meta(Some("og:title".into()), None).to_string(),
            r#"META: { name: "og:title", content: "<EMPTY>" }"#
        );
        assert_eq!(
            OutputUnit::image(Some("logo.png".into()), None).to_string(),
            r#"IMG: { src: "logo.png", alt: "<EMPTY>" }"#
        );
    }

    #[test]
    fn text_blocks_use_tag_label() {
        assert_eq!(
            OutputUnit::text_block(TextKind::NoScript, "enable js".into()).to_string(),
            r#"NOSCRIPT: { text: "enable js" }"#
        );
        assert_eq!(
            OutputUnit::text_block(TextKind::OrderedList, String::new()).to_string(),
            r#"OL: { text: "<EMPTY>" }"#
        );
    }

    #[test]
    fn render_units_joins_with_newlines() {
        let units = vec![
            OutputUnit::button("Go".into()),
            OutputUnit::text_block(TextKind::Title, "Home".into()),
        ];
        assert_eq!(
            render_units(&units),
            "BUTTON: { text: \"Go\" }\nTITLE: { text: \"Home\" }"
        );
        assert_eq!(render_units(&[]), "");
    }
}
