use crate::buffer::{Attribute, ColorRole, ContentKind, StyledBuffer};
use crate::parsing::inline::kinds::WikiLink;
use crate::parsing::inline::{PairNode, scan_pairs};
use crate::parsing::rope::Span;

use super::Formatter;

/// Classifies and styles internal links `[[Target|label]]`.
///
/// A link with another complete link inside its brackets (as happens in
/// image captions: `[[File:x.png|A [[Town]]]]`) is a *link with a nested
/// link*; every other link is a *simple link*.
pub struct LinkClassifier;

impl LinkClassifier {
    /// Outermost links in `range`, with nested links as children.
    pub fn links(&self, buffer: &StyledBuffer, range: Span) -> Vec<PairNode> {
        if range.is_empty() {
            return vec![];
        }
        scan_pairs(range.start, &buffer.slice(range), &WikiLink::DELIMITERS)
    }

    /// True iff `range` is exactly one complete link with no link nested
    /// inside it.
    ///
    /// Surrounding text, a second link or a nested link all give `false`.
    pub fn is_simple_link(&self, buffer: &StyledBuffer, range: Span) -> bool {
        match self.links(buffer, range).as_slice() {
            [only] => only.full == range && !only.has_nested(),
            _ => false,
        }
    }

    /// True iff `range` contains a link whose content holds another
    /// complete link.
    pub fn is_link_with_nested_link(&self, buffer: &StyledBuffer, range: Span) -> bool {
        self.links(buffer, range).iter().any(PairNode::has_nested)
    }
}

fn kind_of(link: &PairNode) -> ContentKind {
    if link.has_nested() {
        ContentKind::LinkWithNestedLink
    } else {
        ContentKind::SimpleLink
    }
}

impl Formatter for LinkClassifier {
    fn name(&self) -> &'static str {
        "link"
    }

    fn apply_formatting(&self, buffer: &mut StyledBuffer, range: Span) {
        for line in buffer.lines_touching(range) {
            for link in scan_pairs(line.span.start, &line.text, &WikiLink::DELIMITERS) {
                buffer.set_attribute(link.full, Attribute::Foreground(ColorRole::Blue));
                buffer.set_attribute(link.full, Attribute::Content(kind_of(&link)));
                for inner in link.descendants() {
                    buffer.set_attribute(inner.full, Attribute::Content(kind_of(inner)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::AttributeKey;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn whole(text: &str) -> (StyledBuffer, Span) {
        let buf = StyledBuffer::new(text);
        let all = Span::new(0, buf.len());
        (buf, all)
    }

    /// `(is_simple_link, is_link_with_nested_link)` over the whole text.
    fn classify(text: &str) -> (bool, bool) {
        let (buf, all) = whole(text);
        (
            LinkClassifier.is_simple_link(&buf, all),
            LinkClassifier.is_link_with_nested_link(&buf, all),
        )
    }

    #[rstest]
    #[case::target_only("[[Page]]", (true, false))]
    #[case::with_label("[[Page|text]]", (true, false))]
    #[case::nested("[[Page|[[Inner]]]]", (false, true))]
    #[case::nested_in_caption("[[File:x.png|A [[Town]] view]]", (false, true))]
    #[case::unterminated("[[Page", (false, false))]
    #[case::unterminated_outer("[[Page|[[Inner]]", (false, false))]
    #[case::unopened("Page]]", (false, false))]
    #[case::blank_target("[[]]", (false, false))]
    #[case::blank_target_label("[[|x]]", (false, false))]
    #[case::siblings("[[A]] [[B]]", (false, false))]
    #[case::surrounding_text("see [[A]]", (false, false))]
    #[case::across_newline("[[Pa\nge]]", (false, false))]
    #[case::in_comment("<!--[[A]]-->", (false, false))]
    #[case::empty("", (false, false))]
    fn classifies_whole_range(#[case] text: &str, #[case] expected: (bool, bool)) {
        assert_eq!(classify(text), expected);
    }

    #[test]
    fn siblings_are_simple_individually() {
        let (buf, _) = whole("[[A]] [[B]]");
        assert!(LinkClassifier.is_simple_link(&buf, Span::new(0, 5)));
        assert!(LinkClassifier.is_simple_link(&buf, Span::new(6, 11)));
        assert!(!LinkClassifier.is_link_with_nested_link(&buf, Span::new(0, 11)));
    }

    #[test]
    fn inner_link_of_nested_is_simple() {
        let (buf, _) = whole("[[Page|[[Inner]]]]");
        assert!(LinkClassifier.is_simple_link(&buf, Span::new(7, 16)));
        assert!(!LinkClassifier.is_link_with_nested_link(&buf, Span::new(7, 16)));
    }

    #[test]
    fn nested_link_inside_wider_range() {
        let (buf, all) = whole("Intro [[Page|[[Inner]]]] outro");
        assert!(LinkClassifier.is_link_with_nested_link(&buf, all));
        assert!(!LinkClassifier.is_simple_link(&buf, all));
    }

    #[test]
    fn empty_range_is_never_a_link() {
        let (buf, _) = whole("[[Page]]");
        assert!(!LinkClassifier.is_simple_link(&buf, Span::new(3, 3)));
        assert!(!LinkClassifier.is_link_with_nested_link(&buf, Span::new(3, 3)));
    }

    #[test]
    fn links_reports_spans() {
        let (buf, all) = whole("x [[Page|[[Inner]]]]");
        let links = LinkClassifier.links(&buf, all);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].full, Span::new(2, 20));
        assert_eq!(links[0].head, Span::new(4, 8));
        assert_eq!(links[0].children[0].full, Span::new(9, 18));
    }

    #[test]
    fn formatting_tags_outer_and_inner_links() {
        let (mut buf, all) = whole("[[Page|[[Inner]]]] [[Other]]");
        LinkClassifier.apply_formatting(&mut buf, all);

        let nested = AttributeKey::Content(ContentKind::LinkWithNestedLink);
        let simple = AttributeKey::Content(ContentKind::SimpleLink);
        let spans = |key| buf.runs(key).iter().map(|r| r.span).collect::<Vec<_>>();
        assert_eq!(spans(nested), vec![Span::new(0, 18)]);
        assert_eq!(spans(simple), vec![Span::new(7, 16), Span::new(19, 28)]);
        assert!(buf.has_attribute_throughout(
            Span::new(0, 18),
            Attribute::Foreground(ColorRole::Blue)
        ));
        assert_eq!(buf.attribute_at(18, AttributeKey::Foreground), None);
    }
}
