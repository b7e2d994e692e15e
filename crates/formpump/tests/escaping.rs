//! Tests for attribute and content escaping.

mod common;
use common::*;

use formpump::{build_tag, html_escape, Attributes, FormData, FormPump, FormVars, InputType, TagEnd};

const NASTY: [&str; 6] = [
    "plain",
    "a & b",
    "<script>alert(1)</script>",
    r#"say "hi""#,
    "it's",
    r#"&amp; already <escaped> "twice" &quot;"#,
];

#[test]
fn attribute_values_round_trip() {
    for value in NASTY {
        let attrs = Attributes::new().with("title", value).with("data_note", value);
        let html = build_tag("input", &attrs, TagEnd::SelfClosing);
        let tags = tags(&html);
        assert_eq!(tags.len(), 1, "{html}");
        assert_eq!(tags[0].attr("title"), value);
        assert_eq!(tags[0].attr("data-note"), value);
    }
}

#[test]
fn stored_values_round_trip() {
    for value in NASTY {
        let data = FormData::from(FormVars::new().with("f", "q", value));
        let html = render_form(&FormPump::new(), Some("f"), &data, |form| {
            Ok(form.input_tag(InputType::Text, named("q")))
        });
        assert_eq!(tags(&html)[1].attr("value"), value);
    }
}

#[test]
fn textarea_content_escaped() {
    let data = FormData::from(FormVars::new().with("f", "body", "</textarea><b>"));
    let html = render_form(&FormPump::new(), Some("f"), &data, |form| {
        Ok(form.textarea_tag(named("body")))
    });
    assert!(html.contains("&lt;/textarea&gt;&lt;b&gt;</textarea>"));
}

#[test]
fn form_name_escaped_in_hidden_input() {
    let pump = FormPump::new().form_name_key("_");
    let html = render_form(&pump, Some(r#"a"b"#), &FormData::default(), |_| Ok(String::new()));
    assert!(html.contains(r#"value="a&quot;b""#));
}

#[test]
fn escape_matches_builder() {
    for value in NASTY {
        let html = build_tag("p", &Attributes::new().with("x", value), TagEnd::Open);
        assert_eq!(html, format!(r#"<p x="{}">"#, html_escape(value)));
    }
}
