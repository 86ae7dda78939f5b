//! Events reported back by a rendering surface or drag source.
//!
//! Surfaces never touch the form directly. They report what happened and the
//! core turns each event into at most one [`Command`].

use serde::{Deserialize, Serialize};

use crate::{parse_options, Command, FieldId, FieldPatch, FieldType, FormError, FormResult};

/// An editable field property exposed by the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    /// Field label (text).
    Label,
    /// Placeholder hint (text).
    Placeholder,
    /// Required marker (toggle).
    Required,
    /// Options list (multi-line text, one option per line).
    Options,
    /// Default checked state of a checkbox (toggle).
    Checked,
}

impl Property {
    /// Caption shown next to the editor.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Label => "Label",
            Self::Placeholder => "Placeholder",
            Self::Required => "Required",
            Self::Options => "Options (one per line)",
            Self::Checked => "Checked by default",
        }
    }

    /// Whether the property is edited with a boolean toggle.
    #[must_use]
    pub const fn is_toggle(self) -> bool {
        matches!(self, Self::Required | Self::Checked)
    }
}

/// The value a bound editor reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    /// Toggle state.
    Bool(bool),
    /// Text content.
    Text(String),
}

/// What an editable view node writes to when its value changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum Binding {
    /// A property of one field.
    Field {
        /// Field being edited.
        id: FieldId,
        /// Property being edited.
        property: Property,
    },
    /// The form title.
    FormTitle,
    /// The form description.
    FormDescription,
}

impl Binding {
    /// Binding for a field property.
    #[must_use]
    pub fn field(id: &FieldId, property: Property) -> Self {
        Self::Field {
            id: id.clone(),
            property,
        }
    }

    /// Convert a reported value into the command that applies it.
    ///
    /// Options text is split into lines, trimmed, and blank lines dropped.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidInput`] if the value has the wrong shape
    /// (text for a toggle or a toggle for text).
    pub fn to_command(&self, value: InputValue) -> FormResult<Command> {
        match (self, value) {
            (Self::FormTitle, InputValue::Text(title)) => Ok(Command::SetTitle { title }),
            (Self::FormDescription, InputValue::Text(description)) => {
                Ok(Command::SetDescription { description })
            }
            (Self::Field { id, property }, value) => {
                let patch = match (property, value) {
                    (Property::Label, InputValue::Text(text)) => FieldPatch::label(text),
                    (Property::Placeholder, InputValue::Text(text)) => {
                        FieldPatch::placeholder(text)
                    }
                    (Property::Options, InputValue::Text(text)) => {
                        FieldPatch::options(parse_options(&text))
                    }
                    (Property::Required, InputValue::Bool(flag)) => FieldPatch::required(flag),
                    (Property::Checked, InputValue::Bool(flag)) => FieldPatch::checked(flag),
                    _ => return Err(self.invalid_input()),
                };
                Ok(Command::UpdateField {
                    id: id.clone(),
                    patch,
                })
            }
            _ => Err(self.invalid_input()),
        }
    }

    fn invalid_input(&self) -> FormError {
        let (binding, expected) = match self {
            Self::Field { id, property } => (
                format!("{id}.{}", property.caption()),
                if property.is_toggle() { "a toggle" } else { "text" },
            ),
            Self::FormTitle => ("form title".to_string(), "text"),
            Self::FormDescription => ("form description".to_string(), "text"),
        };
        FormError::InvalidInput { binding, expected }
    }
}

/// An event from the rendering surface or the drag source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// A field type was clicked in the library or dropped on the canvas.
    FieldTypePicked {
        /// Type token carried by the gesture.
        token: String,
    },
    /// An action node (button, row) was activated.
    Activate {
        /// The command bound to the node.
        command: Command,
    },
    /// A bound editor reported a new value.
    Input {
        /// Where the value goes.
        binding: Binding,
        /// The new value.
        value: InputValue,
    },
    /// A click landed outside the canvas and the inspector.
    ClickAway,
}

impl UiEvent {
    /// Translate the event into the command it triggers.
    ///
    /// A pick with an empty token (a drop without payload) triggers nothing.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownFieldType`] for a token outside the type
    /// set and [`FormError::InvalidInput`] for a mistyped editor value.
    pub fn into_command(self) -> FormResult<Option<Command>> {
        match self {
            Self::FieldTypePicked { token } if token.is_empty() => Ok(None),
            Self::FieldTypePicked { token } => {
                let field_type: FieldType = token.parse()?;
                Ok(Some(Command::AddField { field_type }))
            }
            Self::Activate { command } => Ok(Some(command)),
            Self::Input { binding, value } => binding.to_command(value).map(Some),
            Self::ClickAway => Ok(Some(Command::SelectField { id: None })),
        }
    }
}
