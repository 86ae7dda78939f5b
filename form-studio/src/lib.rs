//! # Form Studio
//!
//! Headless host for the form builder.
//!
//! The host opens a session (empty, or imported from an exported JSON
//! document), replays a script of editing gestures against it, and writes
//! the form out as `form.json` and/or `form.html`.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p form-studio -- --script form-studio/scripts/signup.json --out-dir out
//! ```
//!
//! ## Re-opening an export
//!
//! ```bash
//! cargo run -p form-studio -- --import out/form.json --format html --page-lang en
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `StudioConfig` - Resolved inputs, output directory and export settings
//! - `Script` - Replayable editing steps
//! - [`run`] - Open, replay, export

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

mod script;

pub use script::{Script, ScriptError, ScriptStep};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use form_core::{FormDocument, FormSession, Frame};
use form_export::{ExportConfig, ExportFormat, FormExporter};

/// Which exports to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only `form.json`.
    Json,
    /// Only `form.html`.
    Html,
    /// Both files.
    Both,
}

impl OutputFormat {
    /// Export formats selected by this option.
    #[must_use]
    pub fn formats(self) -> Vec<ExportFormat> {
        match self {
            Self::Json => vec![ExportFormat::Json],
            Self::Html => vec![ExportFormat::Html],
            Self::Both => ExportFormat::ALL.to_vec(),
        }
    }
}

/// Command-line arguments for form-studio.
#[derive(Debug, Clone, Parser)]
#[command(name = "form-studio")]
#[command(about = "Replay a form editing script and export the result")]
#[command(version)]
pub struct CliArgs {
    /// Editing script to replay (JSON)
    #[arg(long, env = "FORM_STUDIO_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Exported form document to start from instead of an empty form
    #[arg(long, env = "FORM_STUDIO_IMPORT")]
    pub import: Option<PathBuf>,

    /// Directory the exports are written to
    #[arg(long, env = "FORM_STUDIO_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Exports to write
    #[arg(long, value_enum, default_value = "both")]
    pub format: OutputFormat,

    /// Pretty-print the JSON document (default)
    #[arg(long, overrides_with = "compact")]
    pub pretty: bool,

    /// Write the JSON document on a single line
    #[arg(long, overrides_with = "pretty")]
    pub compact: bool,

    /// `lang` attribute of the HTML page
    #[arg(long, env = "FORM_STUDIO_PAGE_LANG")]
    pub page_lang: Option<String>,

    /// Print the final canvas, inspector and preview trees as JSON
    #[arg(long)]
    pub print_views: bool,
}

/// Studio configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Script to replay.
    pub script: Option<PathBuf>,
    /// Document to import before replaying.
    pub import: Option<PathBuf>,
    /// Output directory.
    pub out_dir: PathBuf,
    /// Formats to write, in order.
    pub formats: Vec<ExportFormat>,
    /// Exporter settings.
    pub export: ExportConfig,
    /// Dump the final frame to stdout.
    pub print_views: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StudioConfig {
    /// Create a configuration that exports an empty form to the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            script: None,
            import: None,
            out_dir: PathBuf::from("."),
            formats: ExportFormat::ALL.to_vec(),
            export: ExportConfig::default(),
            print_views: false,
        }
    }
}

impl From<CliArgs> for StudioConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            script: args.script,
            import: args.import,
            out_dir: args.out_dir,
            formats: args.format.formats(),
            export: ExportConfig {
                pretty_json: args.pretty || !args.compact,
                page_language: args.page_lang,
                ..ExportConfig::default()
            },
            print_views: args.print_views,
        }
    }
}

/// Outcome of a studio run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Script steps applied.
    pub steps: usize,
    /// Fields in the final form.
    pub fields: usize,
    /// Files written, in order.
    pub written: Vec<PathBuf>,
    /// Views projected from the final state.
    pub frame: Frame,
}

/// Open a session, replay the script and write the exports.
///
/// # Errors
///
/// Returns an error if an input file cannot be read or parsed, a script step
/// fails, or an export cannot be written.
pub fn run(config: &StudioConfig) -> anyhow::Result<RunSummary> {
    let mut session = match &config.import {
        Some(path) => FormSession::from_form(import_form(path)?),
        None => FormSession::new(),
    };

    let steps = match &config.script {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            let script = Script::from_json(&json)
                .with_context(|| format!("Failed to load script {}", path.display()))?;
            script
                .replay(&mut session)
                .with_context(|| format!("Failed to replay script {}", path.display()))?
        }
        None => 0,
    };

    fs::create_dir_all(&config.out_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.out_dir.display()
        )
    })?;

    let exporter = FormExporter::new(config.export.clone());
    let mut written = Vec::with_capacity(config.formats.len());
    for &format in &config.formats {
        let output = exporter.export(session.form(), format)?;
        let path = config.out_dir.join(format.file_name());
        fs::write(&path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(RunSummary {
        steps,
        fields: session.form().len(),
        written,
        frame: session.frame(),
    })
}

/// Load a previously exported JSON document.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a form document, or
/// contains unknown field types or duplicate ids.
pub fn import_form(path: &Path) -> anyhow::Result<form_core::Form> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))?;
    let form = FormDocument::from_json(&json)
        .and_then(FormDocument::into_form)
        .with_context(|| format!("Failed to import document {}", path.display()))?;
    tracing::info!("Imported {} fields from {}", form.len(), path.display());
    Ok(form)
}
