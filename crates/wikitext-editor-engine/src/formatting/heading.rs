use crate::buffer::{Attribute, ColorRole, ContentKind, FontRole, StyledBuffer};
use crate::parsing::lines::WikitextLineClassifier;
use crate::parsing::rope::Span;

use super::Formatter;

/// Section headings. `== x ==` is a heading, `===` to `======` are
/// subheadings one to four.
pub struct HeadingFormatter;

impl HeadingFormatter {
    /// Font and content kind for a heading level (2..=6).
    pub fn roles(level: usize) -> Option<(FontRole, ContentKind)> {
        match level {
            2 => Some((FontRole::Heading, ContentKind::Heading)),
            3 => Some((FontRole::Subheading1, ContentKind::Subheading1)),
            4 => Some((FontRole::Subheading2, ContentKind::Subheading2)),
            5 => Some((FontRole::Subheading3, ContentKind::Subheading3)),
            6 => Some((FontRole::Subheading4, ContentKind::Subheading4)),
            _ => None,
        }
    }
}

impl Formatter for HeadingFormatter {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn apply_formatting(&self, buffer: &mut StyledBuffer, range: Span) {
        for line in buffer.lines_touching(range) {
            let class = WikitextLineClassifier.classify(&line);
            let Some(heading) = class.heading else {
                continue;
            };
            let Some((font, kind)) = Self::roles(heading.level) else {
                continue;
            };
            buffer.set_attribute(class.content, Attribute::Font(font));
            buffer.set_attribute(class.content, Attribute::Content(kind));
            buffer.set_attribute(heading.open, Attribute::Foreground(ColorRole::Orange));
            buffer.set_attribute(heading.close, Attribute::Foreground(ColorRole::Orange));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::AttributeKey;
    use rstest::rstest;

    fn format(text: &str) -> StyledBuffer {
        let mut buf = StyledBuffer::new(text);
        let all = Span::new(0, buf.len());
        HeadingFormatter.apply_formatting(&mut buf, all);
        buf
    }

    #[rstest]
    #[case("== History ==", ContentKind::Heading)]
    #[case("=== Early life ===", ContentKind::Subheading1)]
    #[case("==== Family ====", ContentKind::Subheading2)]
    #[case("===== Parents =====", ContentKind::Subheading3)]
    #[case("====== Mother ======", ContentKind::Subheading4)]
    fn heading_levels(#[case] text: &str, #[case] kind: ContentKind) {
        let buf = format(text);
        assert!(buf.has_attribute_throughout(Span::new(0, text.len()), Attribute::Content(kind)));
    }

    #[test]
    fn markers_are_orange_title_is_not() {
        let buf = format("== A ==\n");
        let fg = |o| buf.attribute_at(o, AttributeKey::Foreground);
        assert_eq!(fg(0), Some(Attribute::Foreground(ColorRole::Orange)));
        assert_eq!(fg(3), None);
        assert_eq!(fg(6), Some(Attribute::Foreground(ColorRole::Orange)));
        assert_eq!(fg(7), None);
        assert_eq!(
            buf.attribute_at(3, AttributeKey::Font),
            Some(Attribute::Font(FontRole::Heading))
        );
    }

    #[test]
    fn non_headings_are_untouched() {
        let buf = format("= Title =\n== unbalanced ===\ntext == x ==");
        assert_eq!(buf.attributes().iter().count(), 0);
    }
}
