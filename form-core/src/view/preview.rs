//! Live preview: the form as its users will see it.

use crate::control::SELECT_PROMPT;
use crate::{Control, Emphasis, Field, Form, SelectEntry, ViewNode};

/// Project the live preview.
#[must_use]
pub fn project_preview(form: &Form) -> ViewNode {
    let mut children = vec![ViewNode::text(form.display_title(), Emphasis::Strong)];
    if !form.description.is_empty() {
        children.push(ViewNode::text(form.description.as_str(), Emphasis::Small));
    }
    children.extend(form.fields().iter().map(preview_row));
    ViewNode::column("live-preview", children)
}

fn preview_row(field: &Field) -> ViewNode {
    let mut children = vec![ViewNode::Label {
        text: field.display_label(),
    }];
    match Control::for_field(field) {
        Control::SingleLine {
            input_type,
            placeholder,
            required,
        } => children.push(ViewNode::Input {
            input_type: input_type.to_string(),
            placeholder: placeholder.to_string(),
            required,
        }),
        Control::MultiLine { placeholder } => children.push(ViewNode::TextArea {
            placeholder: placeholder.to_string(),
        }),
        Control::Checkbox { checked } => children.push(ViewNode::Checkbox { checked }),
        Control::RadioGroup { group, options } => {
            children.extend(options.iter().map(|option| ViewNode::Radio {
                group: group.to_string(),
                value: option.clone(),
                label: option.clone(),
            }));
        }
        Control::Select { options } => {
            let prompt = SelectEntry {
                value: String::new(),
                label: SELECT_PROMPT.to_string(),
                selectable: false,
            };
            let entries = std::iter::once(prompt)
                .chain(options.iter().map(|option| SelectEntry {
                    value: option.clone(),
                    label: option.clone(),
                    selectable: true,
                }))
                .collect();
            children.push(ViewNode::Select { entries });
        }
    }
    ViewNode::column("preview-row", children)
}
