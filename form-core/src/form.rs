//! The form model: title, description and the ordered field sequence.

use crate::{Direction, Field, FieldId, FieldPatch};

/// Title used when the form has none.
pub const DEFAULT_TITLE: &str = "Untitled Form";

/// A form definition. Field order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    /// Form title.
    pub title: String,
    /// Optional description shown under the title.
    pub description: String,
    fields: Vec<Field>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Create an empty form with the default title.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            fields: Vec::new(),
        }
    }

    /// Build a form from already constructed fields.
    #[must_use]
    pub fn with_fields(
        title: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields,
        }
    }

    /// Title to display, falling back to [`DEFAULT_TITLE`] when empty.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }

    /// All fields in display order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Get a field by ID.
    #[must_use]
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Index of a field in display order.
    #[must_use]
    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    /// Check if a field with this id is present.
    #[must_use]
    pub fn contains(&self, id: &FieldId) -> bool {
        self.position(id).is_some()
    }

    /// Get the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the form has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Generate an id that no current field uses.
    #[must_use]
    pub fn fresh_id(&self) -> FieldId {
        loop {
            let id = FieldId::new();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Append a field to the end of the form.
    pub fn push_field(&mut self, field: Field) -> FieldId {
        let id = field.id().clone();
        self.fields.push(field);
        id
    }

    /// Append a deep copy of a field under a fresh id.
    ///
    /// The copy goes to the end of the form, not next to the original.
    /// Returns the new id, or `None` if `id` is not present.
    pub fn duplicate_field(&mut self, id: &FieldId) -> Option<FieldId> {
        let new_id = self.fresh_id();
        let copy = self.field(id)?.duplicate_as(new_id);
        Some(self.push_field(copy))
    }

    /// Move a field one position, clamped to the form bounds.
    ///
    /// Returns `true` if the order changed.
    pub fn move_field(&mut self, id: &FieldId, direction: Direction) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let target = direction.target(index, self.fields.len());
        if target == index {
            return false;
        }
        let field = self.fields.remove(index);
        self.fields.insert(target, field);
        true
    }

    /// Remove a field. Returns the removed field if it was present.
    pub fn remove_field(&mut self, id: &FieldId) -> Option<Field> {
        let index = self.position(id)?;
        Some(self.fields.remove(index))
    }

    /// Apply a partial property change to a field.
    ///
    /// Returns `true` if the field was found.
    pub fn update_field(&mut self, id: &FieldId, patch: &FieldPatch) -> bool {
        match self.fields.iter_mut().find(|f| f.id() == id) {
            Some(field) => {
                field.apply(patch);
                true
            }
            None => false,
        }
    }
}
