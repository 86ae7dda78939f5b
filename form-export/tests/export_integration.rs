//! Export Integration Tests
//!
//! Drives a session through the public API and checks the exported
//! artifacts:
//! - Escaping of every interpolated user string
//! - Checkbox state, radio grouping and select prompt in the page
//! - Title fallback on the page, verbatim title in the document
//! - Document re-import

use form_core::{
    Binding, Direction, FieldPatch, FieldType, FormDocument, FormSession, InputValue, Property,
    UiEvent,
};
use form_export::{escape_html, ExportFormat, FormExporter};

const HOSTILE: &str = r#"<script>alert("x")</script> & 'quotes'"#;

fn export_page(session: &FormSession) -> String {
    FormExporter::with_defaults()
        .export(session.form(), ExportFormat::Html)
        .expect("html export")
}

/// Text between the first `open` and the `close` that follows it.
fn body_text_between<'a>(page: &'a str, open: &str, close: &str) -> &'a str {
    let start = page.find(open).expect("open tag") + open.len();
    let end = start + page[start..].find(close).expect("close tag");
    &page[start..end]
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn test_user_strings_are_escaped_everywhere() {
    let mut session = FormSession::new();
    session.set_title(HOSTILE);
    session.set_description(HOSTILE);
    let text = session.add_field(FieldType::Text);
    session.update_field(
        &text,
        &FieldPatch {
            label: Some(HOSTILE.to_string()),
            placeholder: Some(HOSTILE.to_string()),
            ..FieldPatch::default()
        },
    );
    let select = session.add_field(FieldType::Select);
    session.update_field(&select, &FieldPatch::options(vec![HOSTILE.to_string()]));
    let radio = session.add_field(FieldType::Radio);
    session.update_field(&radio, &FieldPatch::options(vec![HOSTILE.to_string()]));

    let page = export_page(&session);
    let escaped = escape_html(HOSTILE);

    assert!(!page.contains("<script>"));
    assert!(!page.contains(HOSTILE));
    assert_eq!(body_text_between(&page, "<title>", "</title>"), escaped);
    assert_eq!(body_text_between(&page, "<h2>", "</h2>"), escaped);
    assert_eq!(body_text_between(&page, "<p>", "</p>"), escaped);
    assert!(page.contains(&format!("placeholder=\"{escaped}\"")));
    assert!(page.contains(&format!("<option>{escaped}</option>")));
    assert!(page.contains(&format!("/> {escaped}</label>")));
    assert!(escaped.contains("&lt;script&gt;"));
    assert!(escaped.contains("&#39;quotes&#39;"));
}

#[test]
fn test_plain_text_passes_unchanged() {
    let mut session = FormSession::new();
    session.set_title("Café sign-up, 2024");
    let page = export_page(&session);
    assert!(page.contains("<h2>Café sign-up, 2024</h2>"));
}

// ============================================================================
// Controls
// ============================================================================

#[test]
fn test_checkbox_toggled_in_inspector_is_checked_in_page() {
    let mut session = FormSession::new();
    session.add_field(FieldType::Checkbox);
    let id = session.add_field(FieldType::Checkbox);
    session
        .handle_event(UiEvent::Input {
            binding: Binding::field(&id, Property::Checked),
            value: InputValue::Bool(true),
        })
        .expect("toggle checked");

    let page = export_page(&session);
    assert_eq!(page.matches("type=\"checkbox\"").count(), 2);
    assert_eq!(page.matches("type=\"checkbox\" checked").count(), 1);
}

#[test]
fn test_radio_options_share_field_group() {
    let mut session = FormSession::new();
    let id = session.add_field(FieldType::Radio);
    let page = export_page(&session);
    let name = format!("name=\"{id}\"");
    assert_eq!(page.matches(&name).count(), 2);
    assert!(page.contains("/> Option 1</label>"));
    assert!(page.contains("/> Option 2</label>"));
}

#[test]
fn test_select_has_prompt_then_options() {
    let mut session = FormSession::new();
    let id = session.add_field(FieldType::Select);
    session.update_field(
        &id,
        &FieldPatch::options(vec!["Small".to_string(), "Large".to_string()]),
    );
    let page = export_page(&session);
    assert!(page.contains(
        "<select><option value=\"\">-- Select --</option><option>Small</option><option>Large</option></select>"
    ));
}

#[test]
fn test_empty_options_render_no_controls() {
    let mut session = FormSession::new();
    let id = session.add_field(FieldType::Radio);
    session.update_field(&id, &FieldPatch::options(Vec::new()));
    let page = export_page(&session);
    assert!(!page.contains("type=\"radio\""));
}

#[test]
fn test_fields_in_display_order_before_submit() {
    let mut session = FormSession::new();
    let first = session.add_field(FieldType::Text);
    session.update_field(&first, &FieldPatch::label("Alpha"));
    let second = session.add_field(FieldType::Email);
    session.update_field(&second, &FieldPatch::label("Beta"));
    session.move_field(&second, Direction::Up);

    let page = export_page(&session);
    let beta = page.find(">Beta<").expect("beta label");
    let alpha = page.find(">Alpha<").expect("alpha label");
    let submit = page.find("<button type=\"submit\">").expect("submit");
    assert!(beta < alpha);
    assert!(alpha < submit);
}

// ============================================================================
// Title fallback and re-import
// ============================================================================

#[test]
fn test_empty_title_falls_back_on_page_only() {
    let mut session = FormSession::new();
    session.set_title("");
    let exporter = FormExporter::with_defaults();

    let page = exporter
        .export(session.form(), ExportFormat::Html)
        .expect("html export");
    assert!(page.contains("<title>Untitled Form</title>"));
    assert!(page.contains("<h2>Untitled Form</h2>"));

    let json = exporter
        .export(session.form(), ExportFormat::Json)
        .expect("json export");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["title"], "");
    assert_eq!(value["fields"], serde_json::json!([]));
}

#[test]
fn test_exported_document_reimports() {
    let mut session = FormSession::new();
    session.set_title("Order");
    let id = session.add_field(FieldType::Checkbox);
    session.update_field(&id, &FieldPatch::checked(true));
    session.add_field(FieldType::Select);

    let json = FormExporter::with_defaults()
        .export(session.form(), ExportFormat::Json)
        .expect("json export");
    let restored = FormDocument::from_json(&json)
        .expect("parse")
        .into_form()
        .expect("materialize");
    assert_eq!(&restored, session.form());
}
