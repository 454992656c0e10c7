//! # Styled Buffer
//!
//! The editing session's text plus the attributes formatters have applied.
//!
//! A `StyledBuffer` is owned by exactly one session and handed to a
//! formatting pass as `&mut`, so two passes can never interleave on the
//! same buffer.

pub mod attributes;

pub use attributes::{
    Attribute, AttributeKey, AttributeRuns, ColorRole, ContentKind, FontRole, Run,
};

use xi_rope::Rope;

use crate::parsing::rope::{LineRef, Span, lines_touching, slice_to_string};

/// Result of a text replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    /// The region that now holds the inserted text (new coordinates).
    pub changed: Span,
    /// Buffer version after the edit.
    pub version: u64,
}

/// Text storage with per-range display attributes.
#[derive(Debug, Clone)]
pub struct StyledBuffer {
    text: Rope,
    attributes: AttributeRuns,
    version: u64,
}

impl StyledBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            text: Rope::from(text),
            attributes: AttributeRuns::default(),
            version: 0,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.len() == 0
    }

    pub fn text(&self) -> String {
        self.text.to_string()
    }

    pub fn rope(&self) -> &Rope {
        &self.text
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Text of `span`, clamped as by [`StyledBuffer::clamp`].
    pub fn slice(&self, span: Span) -> String {
        slice_to_string(&self.text, self.clamp(span))
    }

    /// Clamps a host-supplied span to the buffer bounds and moves each end
    /// back to the start of the character it falls in.
    ///
    /// Classifiers assume valid spans; hosts clamp before asking.
    pub fn clamp(&self, span: Span) -> Span {
        let span = span.clamp_to(self.len());
        Span::new(
            self.floor_char_boundary(span.start),
            self.floor_char_boundary(span.end),
        )
    }

    fn floor_char_boundary(&self, mut offset: usize) -> usize {
        while offset > 0 && offset < self.len() && !self.text.is_codepoint_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    /// True if `offset` is 0 or directly follows a `\n`.
    pub fn is_line_start(&self, offset: usize) -> bool {
        if offset == 0 {
            return true;
        }
        if offset > self.len() {
            return false;
        }
        self.text.offset_of_line(self.text.line_of_offset(offset)) == offset
    }

    /// Replaces the text in `span` with `text`.
    ///
    /// Attribute runs follow the edit (see [`AttributeRuns::apply_edit`]);
    /// callers re-run formatting over [`Edit::changed`] afterwards.
    pub fn replace(&mut self, span: Span, text: &str) -> Edit {
        let span = self.clamp(span);
        self.text.edit(span.start..span.end, text);
        self.attributes.apply_edit(span, text.len());
        self.version += 1;
        Edit {
            changed: Span::at(span.start, text.len()),
            version: self.version,
        }
    }

    /// Lines overlapping `range` (or containing a caret at `range.start`).
    pub fn lines_touching(&self, range: Span) -> Vec<LineRef> {
        lines_touching(&self.text, range).collect()
    }

    /// `range` widened to whole lines, line endings included.
    pub fn line_range(&self, range: Span) -> Span {
        let lines = self.lines_touching(range);
        match (lines.first(), lines.last()) {
            (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
            _ => range,
        }
    }

    pub fn set_attribute(&mut self, span: Span, attribute: Attribute) {
        let span = self.clamp(span);
        self.attributes.set(span, attribute);
    }

    pub fn remove_attribute(&mut self, span: Span, key: AttributeKey) {
        let span = self.clamp(span);
        self.attributes.remove(span, key);
    }

    pub fn clear_syntax_attributes(&mut self, span: Span) {
        let span = self.clamp(span);
        self.attributes.clear_syntax(span);
    }

    pub fn attribute_at(&self, offset: usize, key: AttributeKey) -> Option<Attribute> {
        self.attributes.get(offset, key)
    }

    pub fn attributes_at(&self, offset: usize) -> Vec<Attribute> {
        self.attributes.at(offset)
    }

    pub fn has_attribute_throughout(&self, span: Span, attribute: Attribute) -> bool {
        self.attributes.covers(span, attribute)
    }

    pub fn runs(&self, key: AttributeKey) -> &[Run] {
        self.attributes.runs(key)
    }

    pub fn attributes(&self) -> &AttributeRuns {
        &self.attributes
    }
}
