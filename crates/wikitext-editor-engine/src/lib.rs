//! # wikitext-editor-engine
//!
//! Syntax highlighting and markup classification for a wikitext source
//! editor.
//!
//! ## Modules
//!
//! - **`parsing`**: spans, line iteration and the wikitext scanners
//! - **`buffer`**: `StyledBuffer`, the text plus its attribute runs
//! - **`formatting`**: the `Formatter` trait, the registry, and the link
//!   and list classifiers
//! - **`selection`**: `SelectionState` read back from formatted attributes
//! - **`find`**: find and replace with match highlighting
//! - **`style`**: themes resolving roles to colours and fonts
//! - **`session`**: `EditorSession`, the entry point for hosts
//! - **`store`**: on-disk drafts and key-value preferences

pub mod buffer;
pub mod find;
pub mod formatting;
pub mod parsing;
pub mod selection;
pub mod session;
pub mod store;
pub mod style;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use buffer::{Attribute, AttributeKey, ColorRole, ContentKind, Edit, FontRole, StyledBuffer};
pub use find::{FindError, FindSession};
pub use formatting::{Formatter, FormatterRegistry, LinkClassifier, ListClassifier};
pub use parsing::rope::Span;
pub use selection::SelectionState;
pub use session::EditorSession;
pub use store::{DataStore, KeyValueStore, MemoryKeyValueStore, StoreError};
pub use style::{FontStyle, ResolvedStyle, Rgb, StyledRun, Theme, ThemeKind};
