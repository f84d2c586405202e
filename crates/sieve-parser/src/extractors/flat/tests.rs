use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::parser::{ParseOptions, parse_html, parse_html_with};

fn lines(source: &str) -> Vec<String> {
    let doc = parse_html_with(source, &ParseOptions::stripping(["style"]));
    extract_units(&doc).iter().map(ToString::to_string).collect()
}

fn single(source: &str) -> String {
    let mut all = lines(source);
    assert_eq!(all.len(), 1, "expected one unit, got {all:?}");
    all.remove(0)
}

#[test]
fn every_recognized_tag_has_a_rule() {
    for tag in RecognizedTag::ALL {
        assert_eq!(RecognizedTag::from_tag(tag.tag()), Some(tag));
        let source = format!("<{0}></{0}>", tag.tag());
        let doc = parse_html(&source);
        let units = extract_units(&doc);
        assert_eq!(units.len(), 1, "tag <{}> produced {units:?}", tag.tag());
    }
}

#[rstest]
#[case("div")]
#[case("span")]
#[case("h1")]
#[case("section")]
#[case("table")]
fn unrecognized_tags_emit_nothing(#[case] tag: &str) {
    assert_eq!(RecognizedTag::from_tag(tag), None);
    assert!(lines(&format!("<{tag}>text</{tag}>")).is_empty());
}

#[test]
fn children_of_unrecognized_elements_are_visited() {
    assert_eq!(
        lines("<div><section><p>deep</p></section></div>"),
        vec![r#"P: { text: "deep" }"#]
    );
}

#[test]
fn nested_matches_each_get_a_line_parent_first() {
    assert_eq!(
        lines(r#"<ul><li><a href="/x">X</a></li></ul>"#),
        vec![
            r#"UL: { text: "X" }"#,
            r#"LI: { text: "X" }"#,
            r#"LINK: { text: "X", href: "/x" }"#,
        ]
    );
}

#[rstest]
#[case("<a>click</a>", r#"LINK: { text: "click", href: "No URL provided" }"#)]
#[case(r#"<a href="">  </a>"#, r#"LINK: { text: "<EMPTY>", href: "" }"#)]
#[case(r#"<img src="a.png">"#, r#"IMG: { src: "a.png", alt: "<EMPTY>" }"#)]
#[case(r#"<img alt="Logo">"#, r#"IMG: { src: "", alt: "Logo" }"#)]
#[case("<form></form>", r#"FORM: { action: "", method: "" }"#)]
#[case("<label>  </label>", r#"LABEL: { for: "", text: "<EMPTY>" }"#)]
#[case("<input>", r#"INPUT: { type: "", name: "", placeholder: "" }"#)]
#[case("<button></button>", r#"BUTTON: { text: "<EMPTY>" }"#)]
#[case("<iframe></iframe>", r#"IFRAME: { src: "" }"#)]
#[case("<script></script>", "SCRIPT: { <SCRIPT INLINE> }")]
#[case(r#"<script src=""></script>"#, "SCRIPT: { <SCRIPT INLINE> }")]
#[case("<title></title>", r#"TITLE: { text: "<EMPTY>" }"#)]
fn missing_attributes_use_defaults(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(single(source), expected);
}

#[rstest]
#[case(r#"<meta name="viewport" content="width=device-width">"#, r#"META: { name: "viewport", content: "width=device-width" }"#)]
#[case(r#"<meta property="og:url" content="https://x.test">"#, r#"META: { name: "og:url", content: "https://x.test" }"#)]
#[case(r#"<meta name="" property="og:type" content="site">"#, r#"META: { name: "og:type", content: "site" }"#)]
#[case(r#"<meta charset="utf-8">"#, r#"META: { name: "", content: "<EMPTY>" }"#)]
fn meta_name_falls_back_to_property(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(single(source), expected);
}

#[test]
fn checkbox_binds_next_label_in_document_order() {
    let source = r#"
        <div><input type="checkbox" name="tos"></div>
        <section><p><label>Accept   terms</label></p></section>
    "#;
    assert_eq!(
        lines(source),
        vec![
            r#"CHECKBOX: { label: "Accept terms", input: { type: "checkbox", name: "tos", placeholder: "" } }"#,
            r#"P: { text: "Accept terms" }"#,
            r#"LABEL: { for: "", text: "Accept terms" }"#,
        ]
    );
}

#[test]
fn checkbox_without_following_label_gets_sentinel() {
    let source = r#"<label>Before</label><input type="checkbox" name="x">"#;
    assert_eq!(
        lines(source)[1],
        r#"CHECKBOX: { label: "<EMPTY>", input: { type: "checkbox", name: "x", placeholder: "" } }"#
    );
}

#[test]
fn checkbox_type_is_matched_exactly() {
    assert_eq!(
        single(r#"<input type="CheckBox" name="c">"#),
        r#"INPUT: { type: "CheckBox", name: "c", placeholder: "" }"#
    );
}

#[test]
fn each_checkbox_finds_its_own_label() {
    let source = r#"
        <input type="checkbox" name="a"><label>A</label>
        <input type="checkbox" name="b"><label>B</label>
    "#;
    let checkboxes: Vec<_> = lines(source)
        .into_iter()
        .filter(|line| line.starts_with("CHECKBOX"))
        .collect();
    assert_eq!(checkboxes.len(), 2);
    assert!(checkboxes[0].contains(r#"label: "A""#));
    assert!(checkboxes[1].contains(r#"label: "B""#));
}

#[rstest]
#[case("<p>AT&amp;T</p>", r#"P: { text: "AT&T" }"#)]
#[case("<p>don&rsquo;t stop</p>", "P: { text: \"don\u{2019}t stop\" }")]
#[case("<button>Caf&eacute;&nbsp;&amp;&nbsp;Bar</button>", r#"BUTTON: { text: "Café & Bar" }"#)]
#[case(r#"<a href="/t?a=1&amp;b=2">Terms &amp; Conditions</a>"#, r#"LINK: { text: "Terms & Conditions", href: "/t?a=1&b=2" }"#)]
fn character_references_do_not_split_text(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(single(source), expected);
}

#[test]
fn attribute_values_stay_on_one_line() {
    assert_eq!(
        single("<form action=\"/a\n  b\" method=post></form>"),
        r#"FORM: { action: "/a b", method: "post" }"#
    );
}

#[test]
fn login_fixture_canonicalizes_in_document_order() {
    let source = include_str!("../../../tests/fixtures/login.html");
    assert_eq!(
        lines(source),
        vec![
            r#"META: { name: "", content: "<EMPTY>" }"#,
            r#"META: { name: "description", content: "Secure Account Login" }"#,
            r#"META: { name: "og:title", content: "<EMPTY>" }"#,
            r#"TITLE: { text: "Account Verification" }"#,
            r#"SCRIPT: { src: "https://cdn.example.test/jquery.min.js" }"#,
            "SCRIPT: { <SCRIPT INLINE> }",
            r#"HEADER: { text: "Help & Support Contact" }"#,
            r#"LINK: { text: "<EMPTY>", href: "/" }"#,
            r#"IMG: { src: "/logo.png", alt: "<EMPTY>" }"#,
            r#"UL: { text: "Help & Support Contact" }"#,
            r#"LI: { text: "Help & Support" }"#,
            r#"LINK: { text: "Help & Support", href: "/help" }"#,
            r#"LI: { text: "Contact" }"#,
            r#"LINK: { text: "Contact", href: "No URL provided" }"#,
            r#"P: { text: "Your account has been suspended. Please sign in." }"#,
            r#"FORM: { action: "/session", method: "POST" }"#,
            r#"LABEL: { for: "email", text: "Email" }"#,
            r#"INPUT: { type: "email", name: "email", placeholder: "you@example.test" }"#,
            r#"INPUT: { type: "password", name: "password", placeholder: "" }"#,
            r#"CHECKBOX: { label: "Remember me", input: { type: "checkbox", name: "remember", placeholder: "" } }"#,
            r#"LABEL: { for: "", text: "Remember me" }"#,
            r#"BUTTON: { text: "Sign in" }"#,
            r#"IFRAME: { src: "https://tracker.example.test/frame" }"#,
            r#"NOSCRIPT: { text: "Enable JavaScript" }"#,
        ]
    );
}
