//! View projections - display trees derived from the form.
//!
//! Each projection is a pure function of the form and the selection. The
//! rendering surface paints the returned [`ViewNode`] tree and reports
//! interaction back as [`UiEvent`](crate::UiEvent)s carrying the bound
//! [`Command`] or [`Binding`].
//!
//! ## Example JSON
//!
//! ```json
//! {
//!   "node": "row",
//!   "class": "field-card",
//!   "on_click": { "command": "select_field", "id": "f3c2..." },
//!   "children": [
//!     { "node": "text", "content": "Email", "emphasis": "strong" },
//!     { "node": "button", "label": "Delete", "action": { "command": "delete_field", "id": "f3c2..." } }
//!   ]
//! }
//! ```

mod canvas;
mod inspector;
mod preview;

pub use canvas::{project_canvas, CANVAS_PLACEHOLDER};
pub use inspector::{project_inspector, INSPECTOR_PLACEHOLDER};
pub use preview::project_preview;

use serde::{Deserialize, Serialize};

use crate::{Binding, Command, FieldId, Form};

/// Text weight hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Regular body text.
    #[default]
    Normal,
    /// Bold heading-like text.
    Strong,
    /// Secondary, smaller text.
    Small,
}

/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectEntry {
    /// Submitted value (empty for the prompt entry).
    pub value: String,
    /// Displayed text.
    pub label: String,
    /// Whether the entry can be chosen.
    pub selectable: bool,
}

/// A display instruction for the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ViewNode {
    /// Vertical stack.
    Column {
        /// Style hook for the surface.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        /// Child nodes.
        children: Vec<ViewNode>,
    },

    /// Horizontal row. A click outside nested actions dispatches `on_click`.
    Row {
        /// Style hook for the surface.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        /// Command for a click on the row itself.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        on_click: Option<Command>,
        /// Child nodes.
        children: Vec<ViewNode>,
    },

    /// Static text.
    Text {
        /// Text to display.
        content: String,
        /// Weight hint.
        #[serde(default)]
        emphasis: Emphasis,
    },

    /// Empty-state message.
    Placeholder {
        /// Message to display.
        message: String,
    },

    /// Clickable action.
    Button {
        /// Button face.
        label: String,
        /// Hover text.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tooltip: Option<String>,
        /// Command dispatched on click.
        action: Command,
    },

    /// Editable text property.
    TextProperty {
        /// Caption shown next to the editor.
        caption: String,
        /// Current value.
        value: String,
        /// Whether the editor spans several lines.
        multiline: bool,
        /// Where edits go.
        binding: Binding,
    },

    /// Editable boolean property.
    ToggleProperty {
        /// Caption shown next to the editor.
        caption: String,
        /// Current value.
        value: bool,
        /// Where edits go.
        binding: Binding,
    },

    /// Caption of a preview control.
    Label {
        /// Caption text.
        text: String,
    },

    /// Single-line preview input.
    Input {
        /// Input kind: `text`, `email`, `number` or `date`.
        input_type: String,
        /// Hint text.
        placeholder: String,
        /// Whether the input is marked required.
        required: bool,
    },

    /// Multi-line preview input.
    TextArea {
        /// Hint text.
        placeholder: String,
    },

    /// Preview checkbox.
    Checkbox {
        /// Initial state.
        checked: bool,
    },

    /// One exclusive-choice button of a radio group.
    Radio {
        /// Group key; buttons sharing it are mutually exclusive.
        group: String,
        /// Submitted value.
        value: String,
        /// Caption next to the button.
        label: String,
    },

    /// Single-choice drop-down.
    Select {
        /// Entries in display order.
        entries: Vec<SelectEntry>,
    },
}

impl ViewNode {
    /// Column with a style hook.
    #[must_use]
    pub fn column(class: &str, children: Vec<Self>) -> Self {
        Self::Column {
            class: Some(class.to_string()),
            children,
        }
    }

    /// Plain text node.
    #[must_use]
    pub fn text(content: impl Into<String>, emphasis: Emphasis) -> Self {
        Self::Text {
            content: content.into(),
            emphasis,
        }
    }

    /// Empty-state placeholder node.
    #[must_use]
    pub fn placeholder(message: impl Into<String>) -> Self {
        Self::Placeholder {
            message: message.into(),
        }
    }

    /// Button bound to a command.
    #[must_use]
    pub fn button(label: impl Into<String>, tooltip: Option<&str>, action: Command) -> Self {
        Self::Button {
            label: label.into(),
            tooltip: tooltip.map(str::to_string),
            action,
        }
    }

    /// Direct children of a container node.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Column { children, .. } | Self::Row { children, .. } => children,
            _ => &[],
        }
    }

    /// This node and all its descendants, depth-first in display order.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    /// Every command reachable from this subtree (row clicks and buttons).
    #[must_use]
    pub fn commands(&self) -> Vec<&Command> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Self::Row {
                    on_click: Some(command),
                    ..
                }
                | Self::Button {
                    action: command, ..
                } => Some(command),
                _ => None,
            })
            .collect()
    }

    /// Check if this node is an empty-state placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// The three views projected from one form snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Builder canvas: one row per field.
    pub canvas: ViewNode,
    /// Property inspector for the selected field.
    pub inspector: ViewNode,
    /// Live preview of the form as users will see it.
    pub preview: ViewNode,
}

impl Frame {
    /// Project all views from the same form and selection.
    ///
    /// An empty form forces the inspector to its empty state.
    #[must_use]
    pub fn project(form: &Form, selection: Option<&FieldId>) -> Self {
        let canvas = project_canvas(form, selection);
        let inspector = if form.is_empty() {
            ViewNode::placeholder(INSPECTOR_PLACEHOLDER)
        } else {
            project_inspector(form, selection)
        };
        let preview = project_preview(form);
        tracing::trace!("Projected frame for {} fields", form.len());
        Self {
            canvas,
            inspector,
            preview,
        }
    }
}
