//! Commands - the only way state changes enter a form session.
//!
//! Each user gesture maps to exactly one command. Commands addressing a field
//! id that is no longer present are no-ops.

use serde::{Deserialize, Serialize};

use crate::{FieldId, FieldPatch, FieldType};

/// Direction for reordering a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the start of the form.
    Up,
    /// Towards the end of the form.
    Down,
}

impl Direction {
    /// Target index for a move from `index` within a sequence of `len` items,
    /// clamped to the sequence bounds.
    #[must_use]
    pub fn target(self, index: usize, len: usize) -> usize {
        let last = len.saturating_sub(1);
        match self {
            Self::Up => index.saturating_sub(1),
            Self::Down => (index + 1).min(last),
        }
    }
}

/// A single state change request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Append a new field with type defaults and select it.
    AddField {
        /// Type of the new field.
        field_type: FieldType,
    },
    /// Append a deep copy of a field under a fresh id.
    DuplicateField {
        /// Field to copy.
        id: FieldId,
    },
    /// Move a field one position.
    MoveField {
        /// Field to move.
        id: FieldId,
        /// Direction of the move.
        direction: Direction,
    },
    /// Remove a field.
    DeleteField {
        /// Field to remove.
        id: FieldId,
    },
    /// Apply a partial property change to a field.
    UpdateField {
        /// Field to change.
        id: FieldId,
        /// Properties to write.
        patch: FieldPatch,
    },
    /// Set or clear the selection.
    SelectField {
        /// Field to select, or `None` to clear.
        id: Option<FieldId>,
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

impl Command {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddField { .. } => "add_field",
            Self::DuplicateField { .. } => "duplicate_field",
            Self::MoveField { .. } => "move_field",
            Self::DeleteField { .. } => "delete_field",
            Self::UpdateField { .. } => "update_field",
            Self::SelectField { .. } => "select_field",
            Self::SetTitle { .. } => "set_title",
            Self::SetDescription { .. } => "set_description",
        }
    }

    /// The field this command addresses, if any.
    #[must_use]
    pub fn target(&self) -> Option<&FieldId> {
        match self {
            Self::DuplicateField { id }
            | Self::MoveField { id, .. }
            | Self::DeleteField { id }
            | Self::UpdateField { id, .. } => Some(id),
            Self::SelectField { id } => id.as_ref(),
            Self::AddField { .. } | Self::SetTitle { .. } | Self::SetDescription { .. } => None,
        }
    }
}
