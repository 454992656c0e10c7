//! # Line Classification
//!
//! Wikitext list items and headings are recognised one line at a time.
//!
//! - **`kinds`**: Line types with owned markers (`ListItem`, `Heading`)
//! - **`classify`**: `WikitextLineClassifier` produces a `LineClass` per line

pub mod classify;
pub mod kinds;

pub use classify::{HeadingLine, LineClass, ListPrefix, WikitextLineClassifier, list_prefix};
pub use kinds::{Heading, ListItem, ListKind};
