//! # Form Studio Core
//!
//! Field model and synchronized multi-view projection for the form builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 form-core                   │
//! ├─────────────────────────────────────────────┤
//! │  Field Model     │  Commands                │
//! │  - Fields        │  - add / duplicate       │
//! │  - Form          │  - move / delete         │
//! │  - Selection     │  - update / select       │
//! ├─────────────────────────────────────────────┤
//! │  View Projections                           │
//! │  - Canvas   - Inspector   - Live Preview    │
//! ├─────────────────────────────────────────────┤
//! │  Document schema (export / re-import)       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every user gesture becomes exactly one [`Command`]. A [`FormSession`]
//! applies it and re-projects all three views from the same snapshot into a
//! [`Frame`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod control;
pub mod error;
pub mod event;
pub mod field;
pub mod form;
pub mod schema;
pub mod session;
pub mod view;

pub use command::{Command, Direction};
pub use control::{Control, SELECT_PROMPT};
pub use error::{FormError, FormResult};
pub use event::{Binding, InputValue, Property, UiEvent};
pub use field::{join_options, parse_options, Field, FieldId, FieldKind, FieldPatch, FieldType};
pub use form::{Form, DEFAULT_TITLE};
pub use schema::{FieldDocument, FormDocument};
pub use session::FormSession;
pub use view::{Emphasis, Frame, SelectEntry, ViewNode};

/// Form core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
