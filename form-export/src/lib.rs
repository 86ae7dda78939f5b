//! # Form Studio Export
//!
//! Turns a [`Form`](form_core::Form) into files that live outside the studio.
//!
//! ## Formats
//!
//! ```text
//! ┌──────────────┐   FormDocument    ┌──────────────────────┐
//! │              │ ────────────────▶ │ JSON (2-space indent)│
//! │     Form     │                   └──────────────────────┘
//! │              │   page::render    ┌──────────────────────┐
//! │              │ ────────────────▶ │ static HTML page     │
//! └──────────────┘                   └──────────────────────┘
//! ```
//!
//! All user text in the page passes through [`escape_html`] exactly once.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod export;
pub mod html;
pub mod page;

pub use error::{ExportError, ExportResult};
pub use export::{ExportConfig, ExportFormat, FormExporter, DEFAULT_STYLESHEET};
pub use html::{escape_html, Element, HtmlNode};
