//! Formatting state at the caret or selection, for toolbar buttons.

use crate::buffer::{Attribute, ContentKind, StyledBuffer};
use crate::parsing::rope::Span;

/// Which constructs the selection sits in.
///
/// Built from the content attributes of the last formatting pass, so the
/// buffer must be formatted first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub is_bold: bool,
    pub is_italics: bool,
    pub is_horizontal_template: bool,
    pub is_horizontal_reference: bool,
    pub is_bullet_single: bool,
    pub is_bullet_multiple: bool,
    pub is_number_single: bool,
    pub is_number_multiple: bool,
    pub is_heading: bool,
    pub is_subheading1: bool,
    pub is_subheading2: bool,
    pub is_subheading3: bool,
    pub is_subheading4: bool,
    pub is_strikethrough: bool,
    pub is_underline: bool,
    pub is_subscript: bool,
    pub is_superscript: bool,
    pub is_simple_link: bool,
    pub is_link_with_nested_link: bool,
    pub is_comment: bool,
}

impl SelectionState {
    /// Reads the state for `range`.
    ///
    /// A caret (empty range) looks at the character after it, or the one
    /// before it at the end of a line or of the buffer. A selection needs
    /// the construct over every character.
    pub fn new(buffer: &StyledBuffer, range: Span) -> Self {
        let range = buffer.clamp(range);
        let has = |kind| has_kind(buffer, range, kind);
        Self {
            is_bold: has(ContentKind::Bold),
            is_italics: has(ContentKind::Italics),
            is_horizontal_template: has(ContentKind::HorizontalTemplate),
            is_horizontal_reference: has(ContentKind::HorizontalReference),
            is_bullet_single: has(ContentKind::BulletSingle),
            is_bullet_multiple: has(ContentKind::BulletMultiple),
            is_number_single: has(ContentKind::NumberSingle),
            is_number_multiple: has(ContentKind::NumberMultiple),
            is_heading: has(ContentKind::Heading),
            is_subheading1: has(ContentKind::Subheading1),
            is_subheading2: has(ContentKind::Subheading2),
            is_subheading3: has(ContentKind::Subheading3),
            is_subheading4: has(ContentKind::Subheading4),
            is_strikethrough: has(ContentKind::Strikethrough),
            is_underline: has(ContentKind::Underline),
            is_subscript: has(ContentKind::Subscript),
            is_superscript: has(ContentKind::Superscript),
            is_simple_link: has(ContentKind::SimpleLink),
            is_link_with_nested_link: has(ContentKind::LinkWithNestedLink),
            is_comment: has(ContentKind::Comment),
        }
    }

    /// The set flags as content kinds, in declaration order.
    pub fn active(&self) -> Vec<ContentKind> {
        [
            (self.is_bold, ContentKind::Bold),
            (self.is_italics, ContentKind::Italics),
            (self.is_horizontal_template, ContentKind::HorizontalTemplate),
            (self.is_horizontal_reference, ContentKind::HorizontalReference),
            (self.is_bullet_single, ContentKind::BulletSingle),
            (self.is_bullet_multiple, ContentKind::BulletMultiple),
            (self.is_number_single, ContentKind::NumberSingle),
            (self.is_number_multiple, ContentKind::NumberMultiple),
            (self.is_heading, ContentKind::Heading),
            (self.is_subheading1, ContentKind::Subheading1),
            (self.is_subheading2, ContentKind::Subheading2),
            (self.is_subheading3, ContentKind::Subheading3),
            (self.is_subheading4, ContentKind::Subheading4),
            (self.is_strikethrough, ContentKind::Strikethrough),
            (self.is_underline, ContentKind::Underline),
            (self.is_subscript, ContentKind::Subscript),
            (self.is_superscript, ContentKind::Superscript),
            (self.is_simple_link, ContentKind::SimpleLink),
            (self.is_link_with_nested_link, ContentKind::LinkWithNestedLink),
            (self.is_comment, ContentKind::Comment),
        ]
        .into_iter()
        .filter_map(|(set, kind)| set.then_some(kind))
        .collect()
    }
}

fn has_kind(buffer: &StyledBuffer, range: Span, kind: ContentKind) -> bool {
    let attribute = Attribute::Content(kind);
    if !range.is_empty() {
        return buffer.has_attribute_throughout(range, attribute);
    }
    let caret = range.start;
    let at_line_end = caret == buffer.len() || buffer.is_line_start(caret + 1);
    let probe = if at_line_end && caret > 0 {
        caret - 1
    } else {
        caret
    };
    buffer.attribute_at(probe, attribute.key()) == Some(attribute)
}
