use crate::buffer::{Attribute, ColorRole, ContentKind, FontRole, StyledBuffer};
use crate::parsing::inline::scan_comments;
use crate::parsing::rope::Span;

use super::Formatter;

/// HTML comments `<!-- ... -->`. Runs last: a comment is raw text, so any
/// styling other formatters put inside it is removed.
pub struct CommentFormatter;

impl Formatter for CommentFormatter {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn apply_formatting(&self, buffer: &mut StyledBuffer, range: Span) {
        for line in buffer.lines_touching(range) {
            for comment in scan_comments(line.span.start, &line.text) {
                buffer.clear_syntax_attributes(comment.full);
                buffer.set_attribute(comment.full, Attribute::Foreground(ColorRole::Gray));
                buffer.set_attribute(comment.full, Attribute::Font(FontRole::Base));
                buffer.set_attribute(comment.full, Attribute::Content(ContentKind::Comment));
            }
        }
    }
}
