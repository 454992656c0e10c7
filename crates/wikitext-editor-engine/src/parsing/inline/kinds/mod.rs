//! # Inline Kinds
//!
//! Inline constructs own their syntax delimiters, so scanner code never
//! hardcodes `[[` or `{{`.
//!
//! - **`WikiLink`**: `OPEN = b"[["`, `CLOSE = b"]]"`, `LABEL = b'|'`
//! - **`Template`**: `OPEN = b"{{"`, `CLOSE = b"}}"`, `PARAM = b'|'`
//! - **`Comment`**: `OPEN = b"<!--"`, `CLOSE = b"-->"` (raw zone)

pub mod comment;
pub mod template;
pub mod wikilink;

pub use comment::Comment;
pub use template::Template;
pub use wikilink::WikiLink;

/// Delimiters of a nestable paired construct.
#[derive(Debug, Clone, Copy)]
pub struct Delimiters {
    pub open: &'static [u8],
    pub close: &'static [u8],
    /// First occurrence at the pair's own depth splits head from tail.
    pub separator: u8,
}
