//! Scripted editing sessions.
//!
//! A script is a JSON list of steps replayed against a [`FormSession`]. Each
//! step becomes the [`UiEvent`] a rendering surface would have reported, so a
//! replay takes the same path as interactive editing. Fields are addressed by
//! their position at the time the step runs because generated ids are not
//! known in advance.
//!
//! ```json
//! {
//!   "steps": [
//!     { "step": "set_title", "title": "Event signup" },
//!     { "step": "add", "type": "text" },
//!     { "step": "edit", "field": 0, "property": "label", "value": "Name" },
//!     { "step": "add", "type": "checkbox" },
//!     { "step": "edit", "field": 1, "property": "checked", "value": true },
//!     { "step": "move", "field": 1, "direction": "up" }
//!   ]
//! }
//! ```

use form_core::{
    Binding, Command, Direction, FieldId, FieldPatch, FieldType, FormError, FormSession,
    InputValue, Property, UiEvent,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or replaying a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script is not valid JSON or has an unknown step shape.
    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    /// A step addressed a position past the end of the form.
    #[error("Step {step}: no field at position {index} (form has {len} fields)")]
    FieldIndex {
        /// Zero-based step number.
        step: usize,
        /// Requested field position.
        index: usize,
        /// Number of fields when the step ran.
        len: usize,
    },

    /// The session rejected the step's event.
    #[error("Step {step}: {source}")]
    Rejected {
        /// Zero-based step number.
        step: usize,
        /// Underlying model error.
        source: FormError,
    },
}

/// One scripted gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Click a field type in the library.
    Add {
        /// Type to add.
        #[serde(rename = "type")]
        field_type: FieldType,
    },
    /// Drop a type token on the canvas. An empty token adds nothing.
    Drop {
        /// Token carried by the drag.
        token: String,
    },
    /// Click a field card, or the background when `field` is absent.
    Select {
        /// Position of the field to select.
        #[serde(default)]
        field: Option<usize>,
    },
    /// Duplicate a field.
    Duplicate {
        /// Position of the field.
        field: usize,
    },
    /// Move a field one step.
    Move {
        /// Position of the field.
        field: usize,
        /// Direction to move.
        direction: Direction,
    },
    /// Delete a field.
    Delete {
        /// Position of the field.
        field: usize,
    },
    /// Type into an inspector editor.
    Edit {
        /// Position of the field.
        field: usize,
        /// Edited property.
        property: Property,
        /// New editor value.
        value: InputValue,
    },
    /// Apply several property changes at once.
    Update {
        /// Position of the field.
        field: usize,
        /// Changes to apply.
        #[serde(flatten)]
        patch: FieldPatch,
    },
    /// Change the form title.
    SetTitle {
        /// New title.
        title: String,
    },
    /// Change the form description.
    SetDescription {
        /// New description.
        description: String,
    },
}

/// A replayable editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Steps in replay order.
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    /// Parse a script from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Parse`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replay every step against the session.
    ///
    /// Returns the number of steps applied. `update` steps that change no
    /// property are skipped and not counted.
    ///
    /// # Errors
    ///
    /// Stops at the first step that addresses a missing position or whose
    /// event the session rejects. Steps before it stay applied.
    pub fn replay(&self, session: &mut FormSession) -> Result<usize, ScriptError> {
        let mut applied = 0;
        for (step, action) in self.steps.iter().enumerate() {
            if action.is_noop() {
                tracing::debug!("Step {}: empty update skipped", step);
                continue;
            }
            let event = action.to_event(session, step)?;
            tracing::debug!("Step {}: {:?}", step, action);
            session
                .handle_event(event)
                .map_err(|source| ScriptError::Rejected { step, source })?;
            applied += 1;
        }
        tracing::info!("Replayed {} of {} steps", applied, self.steps.len());
        Ok(applied)
    }
}

impl ScriptStep {
    /// Whether the step changes nothing.
    fn is_noop(&self) -> bool {
        matches!(self, Self::Update { patch, .. } if patch.is_empty())
    }

    /// The event a surface would report for this step.
    fn to_event(&self, session: &FormSession, step: usize) -> Result<UiEvent, ScriptError> {
        let field = |index: usize| -> Result<FieldId, ScriptError> {
            let fields = session.form().fields();
            fields
                .get(index)
                .map(|f| f.id().clone())
                .ok_or(ScriptError::FieldIndex {
                    step,
                    index,
                    len: fields.len(),
                })
        };
        let activate = |command| UiEvent::Activate { command };

        let event = match self {
            Self::Add { field_type } => UiEvent::FieldTypePicked {
                token: field_type.as_str().to_string(),
            },
            Self::Drop { token } => UiEvent::FieldTypePicked {
                token: token.clone(),
            },
            Self::Select { field: None } => UiEvent::ClickAway,
            Self::Select { field: Some(index) } => activate(Command::SelectField {
                id: Some(field(*index)?),
            }),
            Self::Duplicate { field: index } => activate(Command::DuplicateField {
                id: field(*index)?,
            }),
            Self::Move {
                field: index,
                direction,
            } => activate(Command::MoveField {
                id: field(*index)?,
                direction: *direction,
            }),
            Self::Delete { field: index } => activate(Command::DeleteField {
                id: field(*index)?,
            }),
            Self::Edit {
                field: index,
                property,
                value,
            } => UiEvent::Input {
                binding: Binding::field(&field(*index)?, *property),
                value: value.clone(),
            },
            Self::Update {
                field: index,
                patch,
            } => activate(Command::UpdateField {
                id: field(*index)?,
                patch: patch.clone(),
            }),
            Self::SetTitle { title } => UiEvent::Input {
                binding: Binding::FormTitle,
                value: InputValue::Text(title.clone()),
            },
            Self::SetDescription { description } => UiEvent::Input {
                binding: Binding::FormDescription,
                value: InputValue::Text(description.clone()),
            },
        };
        Ok(event)
    }
}
