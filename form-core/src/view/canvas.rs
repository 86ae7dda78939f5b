//! Builder canvas: one card per field with its actions.

use crate::{Command, Direction, Emphasis, Field, FieldId, Form, ViewNode};

/// Message shown on an empty canvas.
pub const CANVAS_PLACEHOLDER: &str = "Drop fields here or click a field to add.";

/// Project the builder canvas.
///
/// Every card row selects its field when clicked; the four actions dispatch
/// edit (select), move up, move down and delete for the same id.
#[must_use]
pub fn project_canvas(form: &Form, selection: Option<&FieldId>) -> ViewNode {
    if form.is_empty() {
        return ViewNode::placeholder(CANVAS_PLACEHOLDER);
    }
    let cards = form
        .fields()
        .iter()
        .map(|field| field_card(field, selection == Some(field.id())))
        .collect();
    ViewNode::column("canvas", cards)
}

fn field_card(field: &Field, selected: bool) -> ViewNode {
    let id = field.id();
    let select = Command::SelectField {
        id: Some(id.clone()),
    };
    let meta = ViewNode::column(
        "field-meta",
        vec![
            ViewNode::text(field.label.as_str(), Emphasis::Strong),
            ViewNode::text(field.field_type().as_str(), Emphasis::Small),
        ],
    );
    let actions = ViewNode::Row {
        class: Some("field-actions".to_string()),
        on_click: None,
        children: vec![
            ViewNode::button("✏️", Some("Edit"), select.clone()),
            ViewNode::button("⬆️", Some("Up"), move_command(id, Direction::Up)),
            ViewNode::button("⬇️", Some("Down"), move_command(id, Direction::Down)),
            ViewNode::button("🗑️", Some("Delete"), Command::DeleteField { id: id.clone() }),
        ],
    };
    let class = if selected {
        "field-card selected"
    } else {
        "field-card"
    };
    ViewNode::Row {
        class: Some(class.to_string()),
        on_click: Some(select),
        children: vec![meta, actions],
    }
}

fn move_command(id: &FieldId, direction: Direction) -> Command {
    Command::MoveField {
        id: id.clone(),
        direction,
    }
}
