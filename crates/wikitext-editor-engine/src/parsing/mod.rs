//! # Wikitext Scanning
//!
//! Scanners only report spans; they never touch attributes. The formatters
//! and classifiers in [`crate::formatting`] decide what the spans mean.
//!
//! - **`rope`**: `Span` and line iteration over the `xi_rope::Rope` buffer
//! - **`inline`**: balanced pairs (`[[...]]`, `{{...}}`) and comments
//! - **`lines`**: per-line facts (list markers, headings)

pub mod inline;
pub mod lines;
pub mod rope;
