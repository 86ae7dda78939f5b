//! Form session state management.

use crate::{
    Command, Direction, Field, FieldId, FieldKind, FieldPatch, FieldType, Form, FormResult, Frame,
    UiEvent,
};

/// The complete editing session: the form and the current selection.
///
/// All state changes go through the mutation methods (or [`apply`]), and
/// every view is projected from `&self`, so a [`Frame`] always reflects the
/// state right after the last completed mutation.
///
/// [`apply`]: FormSession::apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    form: Form,
    selection: Option<FieldId>,
}

impl FormSession {
    /// Create a session with an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session editing an existing form, with nothing selected.
    #[must_use]
    pub fn from_form(form: Form) -> Self {
        tracing::info!("Opened form \"{}\" with {} fields", form.display_title(), form.len());
        Self {
            form,
            selection: None,
        }
    }

    /// The form being edited.
    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// The selected field id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&FieldId> {
        self.selection.as_ref()
    }

    /// The selected field, if the selection matches a current field.
    #[must_use]
    pub fn selected_field(&self) -> Option<&Field> {
        self.selection.as_ref().and_then(|id| self.form.field(id))
    }

    /// Add a field with type defaults to the end of the form and select it.
    pub fn add_field(&mut self, field_type: FieldType) -> FieldId {
        let field = Field::with_id(self.form.fresh_id(), FieldKind::for_type(field_type));
        let id = self.form.push_field(field);
        tracing::debug!("Added {} field {}", field_type, id);
        self.selection = Some(id.clone());
        id
    }

    /// Append a copy of a field. The selection is unchanged.
    pub fn duplicate_field(&mut self, id: &FieldId) -> Option<FieldId> {
        let copy = self.form.duplicate_field(id);
        if let Some(new_id) = &copy {
            tracing::debug!("Duplicated field {} as {}", id, new_id);
        } else {
            tracing::debug!("Duplicate ignored, no field {}", id);
        }
        copy
    }

    /// Move a field one position up or down.
    pub fn move_field(&mut self, id: &FieldId, direction: Direction) {
        if self.form.move_field(id, direction) {
            tracing::debug!("Moved field {} {:?}", id, direction);
        } else if !self.form.contains(id) {
            tracing::debug!("Move ignored, no field {}", id);
        }
    }

    /// Remove a field, clearing the selection if it was selected.
    pub fn delete_field(&mut self, id: &FieldId) {
        if self.form.remove_field(id).is_some() {
            tracing::debug!("Deleted field {}", id);
        } else {
            tracing::debug!("Delete ignored, no field {}", id);
        }
        if self.selection.as_ref() == Some(id) {
            self.selection = None;
        }
    }

    /// Apply a partial property change to a field.
    pub fn update_field(&mut self, id: &FieldId, patch: &FieldPatch) {
        if !self.form.update_field(id, patch) {
            tracing::debug!("Update ignored, no field {}", id);
        }
    }

    /// Set or clear the selection. The id is not checked against the form.
    pub fn select_field(&mut self, id: Option<FieldId>) {
        self.selection = id;
    }

    /// Change the form title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    /// Change the form description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    /// Apply one command.
    pub fn apply(&mut self, command: Command) {
        tracing::debug!("Applying {}", command.name());
        match command {
            Command::AddField { field_type } => {
                self.add_field(field_type);
            }
            Command::DuplicateField { id } => {
                self.duplicate_field(&id);
            }
            Command::MoveField { id, direction } => self.move_field(&id, direction),
            Command::DeleteField { id } => self.delete_field(&id),
            Command::UpdateField { id, patch } => self.update_field(&id, &patch),
            Command::SelectField { id } => self.select_field(id),
            Command::SetTitle { title } => self.set_title(title),
            Command::SetDescription { description } => self.set_description(description),
        }
    }

    /// Apply one command and re-project every view.
    pub fn dispatch(&mut self, command: Command) -> Frame {
        self.apply(command);
        self.frame()
    }

    /// Handle a surface event: translate, apply, re-project.
    ///
    /// Events that trigger nothing still return a fresh frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the event carries an unknown field type or a
    /// mistyped editor value; the session is left unchanged.
    pub fn handle_event(&mut self, event: UiEvent) -> FormResult<Frame> {
        if let Some(command) = event.into_command()? {
            self.apply(command);
        }
        Ok(self.frame())
    }

    /// Project all views from the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::project(&self.form, self.selection.as_ref())
    }
}
