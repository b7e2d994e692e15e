//! Tests for form blocks, name keys and context switches.

mod common;
use common::*;

use formpump::{Attributes, FormData, FormPump, FormVars, InputType};

#[test]
fn form_defaults() {
    let html = render_form(&FormPump::new(), None, &FormData::default(), |_| {
        Ok("ok".to_string())
    });
    assert_eq!(html, r#"<form method="post" action="">ok</form>"#);
}

#[test]
fn form_name_alone_emits_nothing() {
    let html = render_form(&FormPump::new(), Some("test"), &FormData::default(), |_| {
        Ok("ok".to_string())
    });
    assert_eq!(html, r#"<form method="post" action="">ok</form>"#);
}

#[test]
fn form_attrs_override_defaults() {
    let pump = FormPump::new().default_action("/default");
    let attrs = Attributes::new().with("action", "x").with("class_", "y");
    let html = pump
        .form_block(Some("test"), attrs, &FormData::default(), |_| Ok("ok".to_string()))
        .unwrap();
    assert_html_eq(&html, r#"<form action="x" class="y" method="post">ok</form>"#);
}

#[test]
fn form_name_key() {
    let pump = FormPump::new().form_name_key("_");
    let html = render_form(&pump, Some("test"), &FormData::default(), |_| {
        Ok("ok".to_string())
    });
    assert!(html.starts_with(r#"<form method="post" action=""><input type="hidden" name="_" value="test" />"#));
    assert!(html.ends_with("ok</form>"));
}

#[test]
fn form_name_key_restored_after_override() {
    let mut pump = FormPump::new();
    let previous = pump.set_form_name_key(Some("_".to_string()));
    let keyed = render_form(&pump, Some("test"), &FormData::default(), |_| Ok(String::new()));
    pump.set_form_name_key(previous);
    let plain = render_form(&pump, Some("test"), &FormData::default(), |_| Ok(String::new()));

    assert!(keyed.contains(r#"name="_""#));
    assert_eq!(plain, r#"<form method="post" action=""></form>"#);
}

#[test]
fn form_context_without_key() {
    let html = render_form(&FormPump::new(), None, &FormData::default(), |form| {
        let mut body = form.context_tag("ctx", Attributes::new());
        body.push_str("ok");
        Ok(body)
    });
    assert_eq!(html, r#"<form method="post" action="">ok</form>"#);
}

#[test]
fn form_context_key() {
    let pump = FormPump::new().form_ctx_key("_");
    let html = render_form(&pump, Some("test"), &FormData::default(), |form| {
        Ok(form.context_tag("ctx", Attributes::new()) + "ok")
    });
    assert_eq!(
        html,
        r#"<form method="post" action=""><input type="hidden" name="_" value="ctx" />ok</form>"#
    );
}

#[test]
fn form_context_attrs() {
    let pump = FormPump::new().form_ctx_key("_");
    let html = render_form(&pump, Some("test"), &FormData::default(), |form| {
        Ok(form.context_tag("ctx", Attributes::new().with("var", "val")) + "ok")
    });
    assert_html_eq(
        &html,
        r#"<form action="" method="post"><input var="val" type="hidden" name="_" value="ctx" />ok</form>"#,
    );
}

#[test]
fn form_context_fill() {
    let data = FormData::from(
        FormVars::new()
            .with("test", "var", "test")
            .with("ctx", "var", "ctx"),
    );
    let html = render_form(&FormPump::new(), Some("test"), &data, |form| {
        let before = form.input_tag(InputType::Text, named("var"));
        let switch = form.context_tag("ctx", Attributes::new());
        let after = form.input_tag(InputType::Text, named("var"));
        Ok(before + &switch + &after)
    });
    assert_eq!(
        strip_ids(&html),
        concat!(
            r#"<form method="post" action="">"#,
            r#"<input type="text" name="var" value="test" />"#,
            r#"<input type="text" name="var" value="ctx" />"#,
            "</form>"
        )
    );
}

#[test]
fn form_context_keeps_name_key() {
    let pump = FormPump::new().form_name_key("_form").form_ctx_key("_ctx");
    let html = render_form(&pump, Some("record"), &FormData::default(), |form| {
        Ok(form.context_tag("record.items.0", Attributes::new()))
    });
    let tags = tags(&html);
    assert_eq!(tags[1].attr("name"), "_form");
    assert_eq!(tags[1].attr("value"), "record");
    assert_eq!(tags[2].attr("name"), "_ctx");
    assert_eq!(tags[2].attr("value"), "record.items.0");
}

#[test]
fn action_provider_called_per_form() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let pump = FormPump::new().action_provider(move || {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("/step/{n}")
    });

    let first = render_form(&pump, None, &FormData::default(), |_| Ok(String::new()));
    let second = render_form(&pump, None, &FormData::default(), |_| Ok(String::new()));
    let explicit = pump
        .form_block(
            None,
            Attributes::new().with("action", "/fixed"),
            &FormData::default(),
            |_| Ok(String::new()),
        )
        .unwrap();

    assert!(first.contains(r#"action="/step/1""#));
    assert!(second.contains(r#"action="/step/2""#));
    assert!(explicit.contains(r#"action="/fixed""#));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn tags_outside_form_use_stub() {
    let pump = FormPump::new();
    let mut stub = pump.stub();
    assert_eq!(
        stub.input_tag(InputType::Text, Attributes::new()),
        r#"<input type="text" />"#
    );
    assert_eq!(
        strip_ids(&stub.input_tag(InputType::Text, named("test"))),
        r#"<input type="text" name="test" value="" />"#
    );
}

#[test]
fn nested_render_does_not_disturb_outer_form() {
    let pump = FormPump::new();
    let outer_data = FormData::from(FormVars::new().with("outer", "q", "o"));
    let inner_data = FormData::from(FormVars::new().with("inner", "q", "i"));

    let html = render_form(&pump, Some("outer"), &outer_data, |form| {
        let label = form.label_tag(named("q"));
        let inner = render_form(&pump, Some("inner"), &inner_data, |inner| {
            Ok(inner.input_tag(InputType::Text, named("q")))
        });
        let input = form.input_tag(InputType::Text, named("q"));
        Ok(label + "</label>" + &inner + &input)
    });

    let tags = tags(&html);
    // form, label, /label, form, input, /form, input, /form
    assert_eq!(tags[4].attr("value"), "i");
    assert_eq!(tags[6].attr("value"), "o");
    assert_eq!(tags[1].attr("for"), tags[6].attr("id"));
    assert_ne!(tags[1].attr("for"), tags[4].attr("id"));
}
