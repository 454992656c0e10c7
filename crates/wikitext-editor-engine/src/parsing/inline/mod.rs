//! # Inline Scanning
//!
//! Cursor-based scanning of single-line wikitext constructs.
//!
//! ## Modules
//!
//! - **`types`**: `PairNode` (balanced `[[...]]` / `{{...}}`) and `CommentNode`
//! - **`kinds`**: Inline types owning their delimiters (WikiLink, Template, Comment)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with absolute positions
//! - **`parser`**: `scan_pairs()` and `scan_comments()` entry points
//!
//! ## Raw Zone Precedence
//!
//! Comments take precedence: `<!-- [[not a link]] -->` yields no link.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{scan_comments, scan_pairs};
pub use types::{CommentNode, PairNode};
