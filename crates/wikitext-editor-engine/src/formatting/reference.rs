use std::sync::OnceLock;

use regex::Regex;

use crate::buffer::{Attribute, ColorRole, ContentKind, StyledBuffer};
use crate::parsing::rope::Span;

use super::Formatter;

/// Footnote references: `<ref>...</ref>`, `<ref name="x">...</ref>` and
/// self-closing `<ref name="x" />`, all on one line.
pub struct ReferenceFormatter;

fn ref_regex() -> &'static Regex {
    static REF_REGEX: OnceLock<Regex> = OnceLock::new();
    REF_REGEX.get_or_init(|| {
        Regex::new(r"(?i)<ref(?:\s[^>]*)?/>|<ref(?:\s[^>]*)?>.*?</ref\s*>")
            .expect("Invalid reference regex")
    })
}

impl Formatter for ReferenceFormatter {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn apply_formatting(&self, buffer: &mut StyledBuffer, range: Span) {
        for line in buffer.lines_touching(range) {
            for m in ref_regex().find_iter(&line.text) {
                let full = Span::new(line.span.start + m.start(), line.span.start + m.end());
                buffer.set_attribute(full, Attribute::Foreground(ColorRole::Green));
                buffer.set_attribute(full, Attribute::Content(ContentKind::HorizontalReference));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reference_spans(text: &str) -> Vec<Span> {
        let mut buf = StyledBuffer::new(text);
        let all = Span::new(0, buf.len());
        ReferenceFormatter.apply_formatting(&mut buf, all);
        buf.runs(Attribute::Content(ContentKind::HorizontalReference).key())
            .iter()
            .map(|r| r.span)
            .collect()
    }

    #[rstest]
    #[case::plain("x<ref>Smith 2001</ref>.", vec![Span::new(1, 22)])]
    #[case::named("<ref name=\"a\">p. 4</ref>", vec![Span::new(0, 24)])]
    #[case::self_closing("y<ref name=\"a\" />", vec![Span::new(1, 17)])]
    #[case::upper_case("<REF>x</REF>", vec![Span::new(0, 12)])]
    #[case::two("<ref>a</ref><ref>b</ref>", vec![Span::new(0, 24)])]
    #[case::unclosed("<ref>dangling", vec![])]
    #[case::references_list("<references/>", vec![])]
    #[case::across_lines("<ref>a\nb</ref>", vec![])]
    fn finds_references(#[case] text: &str, #[case] expected: Vec<Span>) {
        assert_eq!(reference_spans(text), expected);
    }
}
