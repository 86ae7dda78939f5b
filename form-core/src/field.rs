//! Form fields - the building blocks of a form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::FormError;

/// Unique identifier for a field.
///
/// Generated ids are `f` followed by a v4 UUID in simple form, so they are
/// valid as HTML `name` values. Ids from imported documents are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Create a new unique field ID.
    #[must_use]
    pub fn new() -> Self {
        Self(format!("f{}", Uuid::new_v4().simple()))
    }

    /// Wrap an existing identifier (e.g. from an imported document).
    #[must_use]
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of field types a form can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Email address input.
    Email,
    /// Numeric input.
    Number,
    /// Date picker input.
    Date,
    /// Multi-line text input.
    Textarea,
    /// Single boolean checkbox.
    Checkbox,
    /// Exclusive choice between options.
    Radio,
    /// Drop-down choice between options.
    Select,
}

impl FieldType {
    /// Every field type, in field library order.
    pub const ALL: [Self; 8] = [
        Self::Text,
        Self::Email,
        Self::Number,
        Self::Date,
        Self::Textarea,
        Self::Checkbox,
        Self::Radio,
        Self::Select,
    ];

    /// The wire token for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::Date => "date",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
        }
    }

    /// Default label: the type token with its first letter capitalized.
    #[must_use]
    pub fn default_label(self) -> String {
        let token = self.as_str();
        let mut chars = token.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| FormError::UnknownFieldType(s.to_string()))
    }
}

/// Type-specific payload of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Email address input.
    Email,
    /// Numeric input.
    Number,
    /// Date picker input.
    Date,
    /// Multi-line text input.
    Textarea,
    /// Boolean checkbox.
    Checkbox {
        /// Whether the box is checked by default.
        checked: bool,
    },
    /// Exclusive choice.
    Radio {
        /// Choices, in display order.
        options: Vec<String>,
    },
    /// Drop-down choice.
    Select {
        /// Choices, in display order.
        options: Vec<String>,
    },
}

impl FieldKind {
    /// Default payload for a freshly added field of the given type.
    #[must_use]
    pub fn for_type(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Text => Self::Text,
            FieldType::Email => Self::Email,
            FieldType::Number => Self::Number,
            FieldType::Date => Self::Date,
            FieldType::Textarea => Self::Textarea,
            FieldType::Checkbox => Self::Checkbox { checked: false },
            FieldType::Radio => Self::Radio {
                options: default_options(),
            },
            FieldType::Select => Self::Select {
                options: default_options(),
            },
        }
    }

    /// The type tag of this payload.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Text => FieldType::Text,
            Self::Email => FieldType::Email,
            Self::Number => FieldType::Number,
            Self::Date => FieldType::Date,
            Self::Textarea => FieldType::Textarea,
            Self::Checkbox { .. } => FieldType::Checkbox,
            Self::Radio { .. } => FieldType::Radio,
            Self::Select { .. } => FieldType::Select,
        }
    }

    /// Options of a choice field.
    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Radio { options } | Self::Select { options } => Some(options),
            _ => None,
        }
    }

    /// Checked state of a checkbox field.
    #[must_use]
    pub const fn checked(&self) -> Option<bool> {
        match self {
            Self::Checkbox { checked } => Some(*checked),
            _ => None,
        }
    }
}

fn default_options() -> Vec<String> {
    vec!["Option 1".to_string(), "Option 2".to_string()]
}

/// A partial property change applied to one field.
///
/// `options` only applies to choice fields and `checked` only to checkboxes;
/// they are ignored for other types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPatch {
    /// New label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// New placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// New required marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Replacement options list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// New checked state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl FieldPatch {
    /// Patch that sets the label.
    #[must_use]
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Patch that sets the placeholder.
    #[must_use]
    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
            ..Self::default()
        }
    }

    /// Patch that sets the required marker.
    #[must_use]
    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Self::default()
        }
    }

    /// Patch that replaces the options list.
    #[must_use]
    pub fn options(options: Vec<String>) -> Self {
        Self {
            options: Some(options),
            ..Self::default()
        }
    }

    /// Patch that sets the checked state.
    #[must_use]
    pub fn checked(checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::default()
        }
    }

    /// Check if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.placeholder.is_none()
            && self.required.is_none()
            && self.options.is_none()
            && self.checked.is_none()
    }
}

/// A single form field definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    id: FieldId,
    kind: FieldKind,
    /// Human-readable label.
    pub label: String,
    /// Whether the field must be filled in.
    pub required: bool,
    /// Hint text for text-like inputs.
    pub placeholder: String,
}

impl Field {
    /// Create a field of the given type with default properties.
    #[must_use]
    pub fn new(field_type: FieldType) -> Self {
        Self::with_id(FieldId::new(), FieldKind::for_type(field_type))
    }

    /// Create a field with an explicit id and payload.
    #[must_use]
    pub fn with_id(id: FieldId, kind: FieldKind) -> Self {
        Self {
            id,
            label: kind.field_type().default_label(),
            kind,
            required: false,
            placeholder: String::new(),
        }
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the required marker.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// The field's identifier.
    #[must_use]
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// The field's type.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// The type-specific payload.
    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Options of a choice field, empty for every other type.
    #[must_use]
    pub fn options(&self) -> &[String] {
        self.kind.options().unwrap_or_default()
    }

    /// Label as shown to form users, with a trailing ` *` when required.
    #[must_use]
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }

    /// Deep copy under `id` with ` (copy)` appended to the label.
    #[must_use]
    pub fn duplicate_as(&self, id: FieldId) -> Self {
        let mut copy = self.clone();
        copy.id = id;
        copy.label.push_str(" (copy)");
        copy
    }

    /// Apply a partial property change in place.
    ///
    /// Returns `true` if any property the field carries was written.
    pub fn apply(&mut self, patch: &FieldPatch) -> bool {
        let mut written = false;
        if let Some(label) = &patch.label {
            self.label.clone_from(label);
            written = true;
        }
        if let Some(placeholder) = &patch.placeholder {
            self.placeholder.clone_from(placeholder);
            written = true;
        }
        if let Some(required) = patch.required {
            self.required = required;
            written = true;
        }
        if let Some(new_options) = &patch.options {
            match &mut self.kind {
                FieldKind::Radio { options } | FieldKind::Select { options } => {
                    options.clone_from(new_options);
                    written = true;
                }
                _ => tracing::debug!(
                    "Ignoring options patch for {} field {}",
                    self.field_type(),
                    self.id
                ),
            }
        }
        if let Some(new_checked) = patch.checked {
            if let FieldKind::Checkbox { checked } = &mut self.kind {
                *checked = new_checked;
                written = true;
            } else {
                tracing::debug!(
                    "Ignoring checked patch for {} field {}",
                    self.field_type(),
                    self.id
                );
            }
        }
        written
    }
}

/// Parse inspector options text: one option per line, trimmed, blanks dropped.
///
/// Duplicates are preserved.
#[must_use]
pub fn parse_options(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join options into inspector text, one per line.
#[must_use]
pub fn join_options(options: &[String]) -> String {
    options.join("\n")
}
