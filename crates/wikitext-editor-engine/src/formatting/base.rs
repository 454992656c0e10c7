use crate::buffer::{Attribute, ColorRole, FontRole, StyledBuffer};
use crate::parsing::rope::Span;

use super::Formatter;

/// Resets a range to plain text before the other formatters run.
///
/// Background runs belong to find/replace and are left alone.
pub struct BaseFormatter;

impl Formatter for BaseFormatter {
    fn name(&self) -> &'static str {
        "base"
    }

    fn apply_formatting(&self, buffer: &mut StyledBuffer, range: Span) {
        buffer.clear_syntax_attributes(range);
        buffer.set_attribute(range, Attribute::Foreground(ColorRole::Base));
        buffer.set_attribute(range, Attribute::Font(FontRole::Base));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{AttributeKey, ContentKind};

    #[test]
    fn clears_syntax_but_keeps_background() {
        let mut buf = StyledBuffer::new("[[A]] x");
        buf.set_attribute(Span::new(0, 5), Attribute::Content(ContentKind::SimpleLink));
        buf.set_attribute(Span::new(0, 5), Attribute::Foreground(ColorRole::Blue));
        buf.set_attribute(Span::new(2, 3), Attribute::Background(ColorRole::MatchBackground));

        BaseFormatter.apply_formatting(&mut buf, Span::new(0, 7));

        assert_eq!(
            buf.attributes_at(2),
            vec![
                Attribute::Foreground(ColorRole::Base),
                Attribute::Background(ColorRole::MatchBackground),
                Attribute::Font(FontRole::Base),
            ]
        );
        assert_eq!(
            buf.attribute_at(0, AttributeKey::Content(ContentKind::SimpleLink)),
            None
        );
    }

    #[test]
    fn leaves_text_outside_the_range() {
        let mut buf = StyledBuffer::new("ab\ncd");
        buf.set_attribute(Span::new(3, 5), Attribute::Foreground(ColorRole::Gray));
        BaseFormatter.apply_formatting(&mut buf, Span::new(0, 3));
        assert_eq!(
            buf.attribute_at(4, AttributeKey::Foreground),
            Some(Attribute::Foreground(ColorRole::Gray))
        );
    }
}
