//! Form Session Integration Tests
//!
//! Tests the complete editing flow through the public API:
//! - Id uniqueness across mutation sequences
//! - Reorder, delete and duplicate semantics
//! - Inspector edits flowing back into the model
//! - Frame consistency across the three views
//! - Document round-trip

use std::collections::HashSet;

use form_core::{
    Binding, Command, Direction, FieldId, FieldPatch, FieldType, FormDocument, FormSession,
    InputValue, Property, UiEvent, ViewNode,
};

fn ids(session: &FormSession) -> Vec<FieldId> {
    session
        .form()
        .fields()
        .iter()
        .map(|f| f.id().clone())
        .collect()
}

/// Count card rows on the canvas.
fn canvas_rows(node: &ViewNode) -> usize {
    node.descendants()
        .into_iter()
        .filter(|n| matches!(n, ViewNode::Row { on_click: Some(_), .. }))
        .count()
}

fn input(binding: Binding, value: InputValue) -> UiEvent {
    UiEvent::Input { binding, value }
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn test_ids_unique_and_never_reused() {
    let mut session = FormSession::new();
    let mut seen = HashSet::new();

    for round in 0..20 {
        let ty = FieldType::ALL[round % FieldType::ALL.len()];
        let id = session.add_field(ty);
        assert!(seen.insert(id.clone()), "id reused: {id}");

        if round % 3 == 0 {
            let copy = session.duplicate_field(&id).expect("duplicate");
            assert!(seen.insert(copy), "duplicate id reused");
        }
        if round % 4 == 0 {
            session.delete_field(&id);
        }
    }

    let current = ids(&session);
    let unique: HashSet<_> = current.iter().collect();
    assert_eq!(unique.len(), current.len());
}

// ============================================================================
// Mutation semantics
// ============================================================================

#[test]
fn test_move_at_bounds_is_no_op() {
    let mut session = FormSession::new();
    let a = session.add_field(FieldType::Text);
    let _b = session.add_field(FieldType::Email);
    let c = session.add_field(FieldType::Date);
    let before = ids(&session);

    session.move_field(&a, Direction::Up);
    assert_eq!(ids(&session), before);
    session.move_field(&c, Direction::Down);
    assert_eq!(ids(&session), before);
}

#[test]
fn test_move_second_up_scenario() {
    let mut session = FormSession::new();
    let first = session.add_field(FieldType::Text);
    let second = session.add_field(FieldType::Number);
    let third = session.add_field(FieldType::Textarea);

    session.apply(Command::MoveField {
        id: second.clone(),
        direction: Direction::Up,
    });
    assert_eq!(ids(&session), vec![second, first, third]);
}

#[test]
fn test_delete_twice_is_idempotent() {
    let mut session = FormSession::new();
    let a = session.add_field(FieldType::Text);
    let b = session.add_field(FieldType::Text);

    session.delete_field(&a);
    let after_first = session.clone();
    session.delete_field(&a);
    assert_eq!(session, after_first);
    assert_eq!(ids(&session), vec![b]);
}

#[test]
fn test_duplicate_is_deep_copy() {
    let mut session = FormSession::new();
    let id = session.add_field(FieldType::Radio);
    session.update_field(
        &id,
        &FieldPatch {
            label: Some("Size".to_string()),
            placeholder: Some("pick one".to_string()),
            required: Some(true),
            options: Some(vec!["S".to_string(), "M".to_string()]),
            checked: None,
        },
    );

    let copy_id = session.duplicate_field(&id).expect("duplicate");
    assert_ne!(copy_id, id);

    // Editing the copy's options must not touch the original.
    session.update_field(&copy_id, &FieldPatch::options(vec!["XL".to_string()]));

    let original = session.form().field(&id).expect("original");
    let copy = session.form().field(&copy_id).expect("copy");
    assert_eq!(copy.field_type(), original.field_type());
    assert_eq!(copy.required, original.required);
    assert_eq!(copy.placeholder, original.placeholder);
    assert_eq!(copy.label, "Size (copy)");
    assert_eq!(original.options(), ["S", "M"]);
    assert_eq!(copy.options(), ["XL"]);
}

#[test]
fn test_duplicate_checkbox_keeps_checked() {
    let mut session = FormSession::new();
    let id = session.add_field(FieldType::Checkbox);
    session.update_field(&id, &FieldPatch::checked(true));
    let copy_id = session.duplicate_field(&id).expect("duplicate");
    let copy = session.form().field(&copy_id).expect("copy");
    assert_eq!(copy.kind().checked(), Some(true));
}

#[test]
fn test_unknown_id_commands_are_no_ops() {
    let mut session = FormSession::new();
    session.add_field(FieldType::Text);
    let before = session.clone();
    let ghost = FieldId::from_string("ghost");

    session.apply(Command::DuplicateField { id: ghost.clone() });
    session.apply(Command::MoveField {
        id: ghost.clone(),
        direction: Direction::Down,
    });
    session.apply(Command::UpdateField {
        id: ghost.clone(),
        patch: FieldPatch::label("nope"),
    });
    session.apply(Command::DeleteField { id: ghost });
    assert_eq!(session, before);
}

// ============================================================================
// Scenarios through the views
// ============================================================================

#[test]
fn test_add_text_scenario() {
    let mut session = FormSession::new();
    let frame = session.handle_event(UiEvent::FieldTypePicked {
        token: "text".to_string(),
    });
    let frame = frame.expect("frame");

    assert_eq!(canvas_rows(&frame.canvas), 1);
    assert!(!frame.inspector.is_placeholder());

    let controls: Vec<_> = frame
        .preview
        .descendants()
        .into_iter()
        .filter(|n| {
            matches!(
                n,
                ViewNode::Input { .. }
                    | ViewNode::TextArea { .. }
                    | ViewNode::Checkbox { .. }
                    | ViewNode::Radio { .. }
                    | ViewNode::Select { .. }
            )
        })
        .collect();
    assert_eq!(
        controls,
        [&ViewNode::Input {
            input_type: "text".to_string(),
            placeholder: String::new(),
            required: false,
        }]
    );
    assert!(frame
        .preview
        .descendants()
        .into_iter()
        .any(|n| *n == ViewNode::Label {
            text: "Text".to_string()
        }));
}

#[test]
fn test_select_options_edit_scenario() {
    let mut session = FormSession::new();
    let id = session.add_field(FieldType::Select);
    assert_eq!(
        session.form().field(&id).expect("field").options(),
        ["Option 1", "Option 2"]
    );

    // Find the options editor in the inspector and report new text for it.
    let frame = session.frame();
    let binding = frame
        .inspector
        .descendants()
        .into_iter()
        .find_map(|n| match n {
            ViewNode::TextProperty {
                binding,
                multiline: true,
                ..
            } => Some(binding.clone()),
            _ => None,
        })
        .expect("options editor");

    session
        .handle_event(input(binding, InputValue::Text("A\nB\nB\n \nC".to_string())))
        .expect("options edit");
    assert_eq!(
        session.form().field(&id).expect("field").options(),
        ["A", "B", "B", "C"]
    );
}

#[test]
fn test_canvas_actions_dispatch_back() {
    let mut session = FormSession::new();
    let a = session.add_field(FieldType::Text);
    let b = session.add_field(FieldType::Email);

    // Press "Up" on the second card.
    let frame = session.frame();
    let up = frame
        .canvas
        .commands()
        .into_iter()
        .find(|c| {
            **c == Command::MoveField {
                id: b.clone(),
                direction: Direction::Up,
            }
        })
        .cloned()
        .expect("up action");
    let frame = session
        .handle_event(UiEvent::Activate { command: up })
        .expect("frame");

    assert_eq!(ids(&session), vec![b.clone(), a]);
    let first_label = frame.canvas.descendants().into_iter().find_map(|n| match n {
        ViewNode::Text { content, .. } => Some(content.clone()),
        _ => None,
    });
    assert_eq!(first_label.as_deref(), Some("Email"));
}

#[test]
fn test_label_edit_updates_canvas_and_preview() {
    let mut session = FormSession::new();
    let id = session.add_field(FieldType::Date);
    session
        .handle_event(input(
            Binding::field(&id, Property::Label),
            InputValue::Text("Birthday".to_string()),
        ))
        .expect("label edit");
    let frame = session
        .handle_event(input(
            Binding::field(&id, Property::Required),
            InputValue::Bool(true),
        ))
        .expect("required edit");

    let canvas_has = frame
        .canvas
        .descendants()
        .into_iter()
        .any(|n| matches!(n, ViewNode::Text { content, .. } if content == "Birthday"));
    let preview_has = frame
        .preview
        .descendants()
        .into_iter()
        .any(|n| matches!(n, ViewNode::Label { text } if text == "Birthday *"));
    assert!(canvas_has);
    assert!(preview_has);
}

#[test]
fn test_delete_from_inspector_empties_views() {
    let mut session = FormSession::new();
    session.add_field(FieldType::Checkbox);
    let frame = session.frame();
    let delete = frame
        .inspector
        .commands()
        .into_iter()
        .find(|c| matches!(c, Command::DeleteField { .. }))
        .cloned()
        .expect("delete action");

    let frame = session.dispatch(delete);
    assert!(frame.canvas.is_placeholder());
    assert!(frame.inspector.is_placeholder());
    assert_eq!(session.selection(), None);
}

#[test]
fn test_click_away_clears_inspector() {
    let mut session = FormSession::new();
    session.add_field(FieldType::Text);
    let frame = session.handle_event(UiEvent::ClickAway).expect("frame");
    assert!(frame.inspector.is_placeholder());
    assert_eq!(canvas_rows(&frame.canvas), 1);
}

// ============================================================================
// Document round-trip
// ============================================================================

#[test]
fn test_document_round_trip() {
    let mut session = FormSession::new();
    session.set_title("Event signup");
    session.set_description("Tell us who is coming");
    let name = session.add_field(FieldType::Text);
    session.update_field(&name, &FieldPatch::placeholder("Full name"));
    let meal = session.add_field(FieldType::Radio);
    session.update_field(
        &meal,
        &FieldPatch::options(vec!["Fish".to_string(), "Veg".to_string()]),
    );
    let agree = session.add_field(FieldType::Checkbox);
    session.update_field(&agree, &FieldPatch::checked(true));
    session.move_field(&agree, Direction::Up);

    let json = FormDocument::from_form(session.form())
        .to_json_pretty()
        .expect("serialize");
    let restored = FormDocument::from_json(&json)
        .expect("parse")
        .into_form()
        .expect("materialize");

    assert_eq!(&restored, session.form());
}

#[test]
fn test_empty_title_round_trips_as_empty() {
    let mut session = FormSession::new();
    session.set_title("");
    session.add_field(FieldType::Text);

    let document = FormDocument::from_form(session.form());
    assert_eq!(document.title, "");

    let json = document.to_json().expect("serialize");
    let restored = FormDocument::from_json(&json)
        .expect("parse")
        .into_form()
        .expect("materialize");
    assert_eq!(&restored, session.form());
    assert_eq!(restored.display_title(), "Untitled Form");
}

#[test]
fn test_imported_session_starts_unselected() {
    let mut session = FormSession::new();
    session.add_field(FieldType::Email);
    let form = FormDocument::from_form(session.form())
        .into_form()
        .expect("materialize");

    let mut imported = FormSession::from_form(form);
    assert_eq!(imported.selection(), None);
    let existing = ids(&imported);
    let added = imported.add_field(FieldType::Email);
    assert!(!existing.contains(&added));
}
