//! Mapping from a field to the input control that represents it.
//!
//! The live preview and the static page exporter both render fields through
//! [`Control::for_field`], so the two always agree on which control a field
//! type produces.

use crate::{Field, FieldKind};

/// The input control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control<'a> {
    /// Single-line input (`text`, `email`, `number`, `date`).
    SingleLine {
        /// HTML input type token.
        input_type: &'static str,
        /// Hint text.
        placeholder: &'a str,
        /// Whether the input is required.
        required: bool,
    },
    /// Multi-line text area.
    MultiLine {
        /// Hint text.
        placeholder: &'a str,
    },
    /// Boolean checkbox.
    Checkbox {
        /// Initial state.
        checked: bool,
    },
    /// One exclusive-choice button per option, grouped by field id.
    RadioGroup {
        /// Group key shared by every button.
        group: &'a str,
        /// One entry per button.
        options: &'a [String],
    },
    /// Drop-down with a leading non-selectable prompt entry.
    Select {
        /// One entry per choice, after the prompt.
        options: &'a [String],
    },
}

/// Leading entry of every select control.
pub const SELECT_PROMPT: &str = "-- Select --";

impl<'a> Control<'a> {
    /// Control for a field.
    #[must_use]
    pub fn for_field(field: &'a Field) -> Self {
        let single_line = move |input_type: &'static str| Self::SingleLine {
            input_type,
            placeholder: &field.placeholder,
            required: field.required,
        };
        match field.kind() {
            FieldKind::Text => single_line("text"),
            FieldKind::Email => single_line("email"),
            FieldKind::Number => single_line("number"),
            FieldKind::Date => single_line("date"),
            FieldKind::Textarea => Self::MultiLine {
                placeholder: &field.placeholder,
            },
            FieldKind::Checkbox { checked } => Self::Checkbox { checked: *checked },
            FieldKind::Radio { options } => Self::RadioGroup {
                group: field.id().as_str(),
                options,
            },
            FieldKind::Select { options } => Self::Select { options },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldPatch, FieldType};

    #[test]
    fn test_single_line_carries_required() {
        let field = Field::new(FieldType::Number)
            .with_placeholder("42")
            .with_required(true);
        assert_eq!(
            Control::for_field(&field),
            Control::SingleLine {
                input_type: "number",
                placeholder: "42",
                required: true,
            }
        );
    }

    #[test]
    fn test_radio_groups_by_field_id() {
        let field = Field::new(FieldType::Radio);
        match Control::for_field(&field) {
            Control::RadioGroup { group, options } => {
                assert_eq!(group, field.id().as_str());
                assert_eq!(options.len(), 2);
            }
            other => panic!("Expected RadioGroup, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_options_render_nothing() {
        let mut field = Field::new(FieldType::Select);
        field.apply(&FieldPatch::options(Vec::new()));
        assert_eq!(Control::for_field(&field), Control::Select { options: &[] });
    }
}
