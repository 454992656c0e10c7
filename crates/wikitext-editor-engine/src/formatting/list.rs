use crate::buffer::{Attribute, ColorRole, ContentKind, StyledBuffer};
use crate::parsing::lines::{ListKind, ListPrefix, WikitextLineClassifier, list_prefix};
use crate::parsing::rope::Span;

use super::Formatter;

/// Classifies and styles list item lines (`* item`, `## item`).
///
/// The predicates read the buffer text directly, so they answer correctly
/// whether or not a formatting pass has run.
pub struct ListClassifier;

impl ListClassifier {
    /// The list prefix of the first line of `range`.
    ///
    /// `None` unless `range` is non-empty and starts a line.
    fn prefix(&self, buffer: &StyledBuffer, range: Span) -> Option<ListPrefix> {
        if range.is_empty() || !buffer.is_line_start(range.start) {
            return None;
        }
        let text = buffer.slice(range);
        let first_line = text.split('\n').next().unwrap_or_default();
        list_prefix(range.start, first_line)
    }

    /// True if `range` starts a line with exactly one `*` marker.
    pub fn is_bullet_single(&self, buffer: &StyledBuffer, range: Span) -> bool {
        self.content_kind_of(buffer, range) == Some(ContentKind::BulletSingle)
    }

    /// True if `range` starts a line with two or more stacked markers, the
    /// first being `*`.
    pub fn is_bullet_multiple(&self, buffer: &StyledBuffer, range: Span) -> bool {
        self.content_kind_of(buffer, range) == Some(ContentKind::BulletMultiple)
    }

    /// True if `range` starts a line with exactly one `#` marker.
    pub fn is_number_single(&self, buffer: &StyledBuffer, range: Span) -> bool {
        self.content_kind_of(buffer, range) == Some(ContentKind::NumberSingle)
    }

    /// True if `range` starts a line with two or more stacked markers, the
    /// first being `#`.
    pub fn is_number_multiple(&self, buffer: &StyledBuffer, range: Span) -> bool {
        self.content_kind_of(buffer, range) == Some(ContentKind::NumberMultiple)
    }

    fn content_kind_of(&self, buffer: &StyledBuffer, range: Span) -> Option<ContentKind> {
        self.prefix(buffer, range).map(content_kind)
    }
}

/// The content kind a list prefix stands for.
fn content_kind(prefix: ListPrefix) -> ContentKind {
    match (prefix.kind, prefix.depth > 1) {
        (ListKind::Bullet, false) => ContentKind::BulletSingle,
        (ListKind::Bullet, true) => ContentKind::BulletMultiple,
        (ListKind::Number, false) => ContentKind::NumberSingle,
        (ListKind::Number, true) => ContentKind::NumberMultiple,
    }
}

impl Formatter for ListClassifier {
    fn name(&self) -> &'static str {
        "list"
    }

    fn apply_formatting(&self, buffer: &mut StyledBuffer, range: Span) {
        for line in buffer.lines_touching(range) {
            let class = WikitextLineClassifier.classify(&line);
            if let Some(prefix) = class.list {
                buffer.set_attribute(prefix.markers, Attribute::Foreground(ColorRole::Orange));
                buffer.set_attribute(class.content, Attribute::Content(content_kind(prefix)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::AttributeKey;
    use rstest::rstest;

    fn whole(text: &str) -> (StyledBuffer, Span) {
        let buf = StyledBuffer::new(text);
        let all = Span::new(0, buf.len());
        (buf, all)
    }

    /// `[bullet_single, bullet_multiple, number_single, number_multiple]`
    fn predicates(buf: &StyledBuffer, range: Span) -> [bool; 4] {
        [
            ListClassifier.is_bullet_single(buf, range),
            ListClassifier.is_bullet_multiple(buf, range),
            ListClassifier.is_number_single(buf, range),
            ListClassifier.is_number_multiple(buf, range),
        ]
    }

    #[rstest]
    #[case::bullet("* item", [true, false, false, false])]
    #[case::bullet_nested("** item", [false, true, false, false])]
    #[case::number("# step", [false, false, true, false])]
    #[case::number_nested("### step", [false, false, false, true])]
    #[case::mixed_bullet_first("*# x", [false, true, false, false])]
    #[case::mixed_number_first("#* x", [false, false, false, true])]
    #[case::marker_only("*", [true, false, false, false])]
    #[case::plain("item", [false, false, false, false])]
    #[case::indented(":* item", [false, false, false, false])]
    #[case::leading_space(" * item", [false, false, false, false])]
    fn classifies_first_line(#[case] text: &str, #[case] expected: [bool; 4]) {
        let (buf, all) = whole(text);
        assert_eq!(predicates(&buf, all), expected);
    }

    #[test]
    fn empty_range_is_not_a_list() {
        let (buf, _) = whole("* item");
        assert_eq!(predicates(&buf, Span::new(0, 0)), [false; 4]);
    }

    #[test]
    fn range_must_start_a_line() {
        let (buf, _) = whole("x\n** item");
        assert!(ListClassifier.is_bullet_multiple(&buf, Span::new(2, 9)));
        assert_eq!(predicates(&buf, Span::new(3, 9)), [false; 4]);
        assert_eq!(predicates(&buf, Span::new(1, 9)), [false; 4]);
    }

    #[test]
    fn only_the_first_line_counts() {
        let (buf, all) = whole("text\n* item");
        assert_eq!(predicates(&buf, all), [false; 4]);
    }

    #[test]
    fn formatting_marks_markers_and_line() {
        let mut buf = StyledBuffer::new("## step\nplain");
        let all = Span::new(0, buf.len());
        ListClassifier.apply_formatting(&mut buf, all);

        assert!(buf.has_attribute_throughout(
            Span::new(0, 7),
            Attribute::Content(ContentKind::NumberMultiple)
        ));
        assert_eq!(
            buf.attribute_at(1, AttributeKey::Foreground),
            Some(Attribute::Foreground(ColorRole::Orange))
        );
        assert_eq!(buf.attribute_at(2, AttributeKey::Foreground), None);
        assert!(buf.attributes_at(8).is_empty());
    }
}
