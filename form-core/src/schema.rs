//! Canonical serialized representation of a form, for export and re-import.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Field, FieldId, FieldKind, FieldType, Form, FormError, FormResult};

/// Document-friendly field description.
///
/// Every field carries `options` (empty unless the type is a choice type);
/// `checked` is present only for checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDocument {
    /// Field identifier.
    pub id: String,
    /// Type token.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Label.
    pub label: String,
    /// Required marker.
    #[serde(default)]
    pub required: bool,
    /// Placeholder hint.
    #[serde(default)]
    pub placeholder: String,
    /// Choices for radio/select fields.
    #[serde(default)]
    pub options: Vec<String>,
    /// Checked state for checkbox fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl From<&Field> for FieldDocument {
    fn from(field: &Field) -> Self {
        Self {
            id: field.id().to_string(),
            field_type: field.field_type().as_str().to_string(),
            label: field.label.clone(),
            required: field.required,
            placeholder: field.placeholder.clone(),
            options: field.options().to_vec(),
            checked: field.kind().checked(),
        }
    }
}

impl FieldDocument {
    /// Convert document to runtime field.
    ///
    /// Options on non-choice types and `checked` on non-checkbox types are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownFieldType`] if the type token is not one
    /// of the supported types.
    pub fn into_field(self) -> FormResult<Field> {
        let field_type: FieldType = self.field_type.parse()?;
        let kind = match field_type {
            FieldType::Checkbox => FieldKind::Checkbox {
                checked: self.checked.unwrap_or(false),
            },
            FieldType::Radio => FieldKind::Radio {
                options: self.options,
            },
            FieldType::Select => FieldKind::Select {
                options: self.options,
            },
            other => {
                if !self.options.is_empty() {
                    tracing::debug!("Dropping options of {} field {}", other, self.id);
                }
                FieldKind::for_type(other)
            }
        };
        Ok(Field::with_id(FieldId::from_string(self.id), kind)
            .with_label(self.label)
            .with_placeholder(self.placeholder)
            .with_required(self.required))
    }
}

/// Canonical form document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDocument {
    /// Form title.
    pub title: String,
    /// Form description.
    #[serde(default)]
    pub description: String,
    /// Fields in display order.
    #[serde(default)]
    pub fields: Vec<FieldDocument>,
}

impl FormDocument {
    /// Build a document from a runtime form. The title is written as is,
    /// empty included.
    #[must_use]
    pub fn from_form(form: &Form) -> Self {
        Self {
            title: form.title.clone(),
            description: form.description.clone(),
            fields: form.fields().iter().map(FieldDocument::from).collect(),
        }
    }

    /// Materialize a runtime form from this document.
    ///
    /// # Errors
    ///
    /// Returns an error if a field has an unknown type or two fields share
    /// an id.
    pub fn into_form(self) -> FormResult<Form> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(self.fields.len());
        for doc in self.fields {
            if !seen.insert(doc.id.clone()) {
                return Err(FormError::DuplicateFieldId(doc.id));
            }
            fields.push(doc.into_field()?);
        }
        Ok(Form::with_fields(self.title, self.description, fields))
    }

    /// Serialize the document to JSON, pretty-printed with two-space indent.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> FormResult<String> {
        serde_json::to_string_pretty(self).map_err(FormError::Serialization)
    }

    /// Serialize the document to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> FormResult<String> {
        serde_json::to_string(self).map_err(FormError::Serialization)
    }

    /// Deserialize a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> FormResult<Self> {
        serde_json::from_str(json).map_err(FormError::Serialization)
    }
}
