//! Property inspector for the selected field.

use crate::{join_options, Binding, Command, Field, FieldId, FieldKind, Form, Property, ViewNode};

/// Message shown when no field is selected.
pub const INSPECTOR_PLACEHOLDER: &str = "Select a field to edit its properties";

/// Project the property inspector.
///
/// A selection that no longer matches a field shows the empty state.
#[must_use]
pub fn project_inspector(form: &Form, selection: Option<&FieldId>) -> ViewNode {
    match selection.and_then(|id| form.field(id)) {
        Some(field) => property_panel(field),
        None => ViewNode::placeholder(INSPECTOR_PLACEHOLDER),
    }
}

fn property_panel(field: &Field) -> ViewNode {
    let id = field.id();
    let mut rows = vec![
        text_property(id, Property::Label, field.label.clone(), false),
        text_property(id, Property::Placeholder, field.placeholder.clone(), false),
        toggle_property(id, Property::Required, field.required),
    ];
    match field.kind() {
        FieldKind::Radio { options } | FieldKind::Select { options } => {
            rows.push(text_property(id, Property::Options, join_options(options), true));
        }
        FieldKind::Checkbox { checked } => {
            rows.push(toggle_property(id, Property::Checked, *checked));
        }
        _ => {}
    }
    rows.push(ViewNode::Row {
        class: Some("inspector-actions".to_string()),
        on_click: None,
        children: vec![
            ViewNode::button("Duplicate", None, Command::DuplicateField { id: id.clone() }),
            ViewNode::button("Delete", None, Command::DeleteField { id: id.clone() }),
        ],
    });
    ViewNode::column("inspector", rows)
}

fn text_property(id: &FieldId, property: Property, value: String, multiline: bool) -> ViewNode {
    ViewNode::TextProperty {
        caption: property.caption().to_string(),
        value,
        multiline,
        binding: Binding::field(id, property),
    }
}

fn toggle_property(id: &FieldId, property: Property, value: bool) -> ViewNode {
    ViewNode::ToggleProperty {
        caption: property.caption().to_string(),
        value,
        binding: Binding::field(id, property),
    }
}
