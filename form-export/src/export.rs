//! Form export to document and page formats.
//!
//! A [`FormExporter`] turns a [`Form`] into either the canonical JSON
//! document (re-importable through [`FormDocument`]) or a standalone HTML
//! page that can be opened without the studio.

use std::fmt;
use std::str::FromStr;

use form_core::{Form, FormDocument};

use crate::error::{ExportError, ExportResult};
use crate::page;

/// Inline stylesheet of the static page.
pub const DEFAULT_STYLESHEET: &str = "body{font-family:Inter, Arial, sans-serif;padding:24px;background:#f6f9fc;color:#0b1220}\
form input, form textarea, form select{display:block;padding:8px;border:1px solid #d8e1ea;border-radius:8px;width:100%;max-width:480px}\
button{background:#2563eb;color:#fff;padding:8px 12px;border-radius:8px;border:none;margin-top:8px}";

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Canonical JSON document.
    Json,
    /// Standalone HTML page.
    Html,
}

impl ExportFormat {
    /// Both formats, in the order the studio writes them.
    pub const ALL: [Self; 2] = [Self::Json, Self::Html];

    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    /// Default output file name.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Json => "form.json",
            Self::Html => "form.html",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Configuration for form export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Pretty-print the JSON document with two-space indentation (default: true).
    pub pretty_json: bool,
    /// Value of the page's `lang` attribute (default: none).
    pub page_language: Option<String>,
    /// Replacement for [`DEFAULT_STYLESHEET`] (default: none).
    pub stylesheet: Option<String>,
    /// Caption of the submit button (default: "Submit").
    pub submit_label: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            page_language: None,
            stylesheet: None,
            submit_label: "Submit".to_string(),
        }
    }
}

impl ExportConfig {
    /// Stylesheet written into the page.
    #[must_use]
    pub fn stylesheet(&self) -> &str {
        self.stylesheet.as_deref().unwrap_or(DEFAULT_STYLESHEET)
    }
}

/// Exports a [`Form`] to JSON or HTML.
#[derive(Debug, Clone, Default)]
pub struct FormExporter {
    config: ExportConfig,
}

impl FormExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export a form to the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized.
    pub fn export(&self, form: &Form, format: ExportFormat) -> ExportResult<String> {
        let output = match format {
            ExportFormat::Json => self.render_document(form)?,
            ExportFormat::Html => self.render_page(form),
        };
        tracing::info!(
            "Exported form \"{}\" as {} ({} fields, {} bytes)",
            form.display_title(),
            format,
            form.len(),
            output.len()
        );
        Ok(output)
    }

    /// Serialize the form as its canonical JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_document(&self, form: &Form) -> ExportResult<String> {
        let document = FormDocument::from_form(form);
        let json = if self.config.pretty_json {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    /// Render the form as a standalone HTML page.
    #[must_use]
    pub fn render_page(&self, form: &Form) -> String {
        page::render(form, &self.config)
    }
}
