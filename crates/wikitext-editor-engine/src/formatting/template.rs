use crate::buffer::{Attribute, ColorRole, ContentKind, StyledBuffer};
use crate::parsing::inline::kinds::Template;
use crate::parsing::inline::scan_pairs;
use crate::parsing::rope::Span;

use super::Formatter;

/// Colours single-line template transclusions `{{name|params}}` purple.
///
/// Nested templates are covered by their outermost pair.
pub struct TemplateFormatter;

impl Formatter for TemplateFormatter {
    fn name(&self) -> &'static str {
        "template"
    }

    fn apply_formatting(&self, buffer: &mut StyledBuffer, range: Span) {
        for line in buffer.lines_touching(range) {
            for node in scan_pairs(line.span.start, &line.text, &Template::DELIMITERS) {
                buffer.set_attribute(node.full, Attribute::Foreground(ColorRole::Purple));
                buffer.set_attribute(node.full, Attribute::Content(ContentKind::HorizontalTemplate));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::AttributeKey;

    const TEMPLATE: Attribute = Attribute::Content(ContentKind::HorizontalTemplate);

    fn format(text: &str) -> StyledBuffer {
        let mut buf = StyledBuffer::new(text);
        let all = Span::new(0, buf.len());
        TemplateFormatter.apply_formatting(&mut buf, all);
        buf
    }

    #[test]
    fn template_is_purple() {
        let buf = format("Born {{birth date|1920|5|3}}.");
        assert!(buf.has_attribute_throughout(Span::new(5, 28), TEMPLATE));
        assert_eq!(
            buf.attribute_at(5, AttributeKey::Foreground),
            Some(Attribute::Foreground(ColorRole::Purple))
        );
        assert_eq!(buf.attribute_at(28, TEMPLATE.key()), None);
    }

    #[test]
    fn nested_template_is_one_run() {
        let buf = format("{{a|{{b}}}}");
        assert_eq!(buf.runs(TEMPLATE.key()).len(), 1);
        assert!(buf.has_attribute_throughout(Span::new(0, 11), TEMPLATE));
    }

    #[test]
    fn template_across_lines_is_ignored() {
        let buf = format("{{infobox\n|name=x}}");
        assert!(buf.runs(TEMPLATE.key()).is_empty());
    }
}
