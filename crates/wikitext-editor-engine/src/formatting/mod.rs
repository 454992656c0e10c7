//! # Formatting
//!
//! Formatters turn scanner output into buffer attributes. Each formatter is
//! an independent type implementing [`Formatter`]; the [`FormatterRegistry`]
//! holds them in the order they must run.
//!
//! ## Pass Model
//!
//! A pass always covers whole lines. Wikitext constructs handled here never
//! cross a line break, so re-formatting the lines an edit touched is enough
//! to bring the whole buffer back to the state a full pass would produce.
//!
//! ## Order
//!
//! Later formatters win on the same attribute key:
//!
//! 1. `base` resets syntax attributes
//! 2. `template`, `bold_italics`, `reference`, `list`, `heading`, `html_tag`
//! 3. `link` (links inside templates and references stay blue)
//! 4. `comment` (comment bodies are raw and override everything)

mod base;
mod bold_italics;
mod comment;
mod heading;
mod html_tag;
mod link;
mod list;
mod reference;
mod template;

pub use base::BaseFormatter;
pub use bold_italics::BoldItalicsFormatter;
pub use comment::CommentFormatter;
pub use heading::HeadingFormatter;
pub use html_tag::HtmlTagFormatter;
pub use link::LinkClassifier;
pub use list::ListClassifier;
pub use reference::ReferenceFormatter;
pub use template::TemplateFormatter;

use std::time::Instant;

use crate::buffer::StyledBuffer;
use crate::parsing::rope::Span;

/// Applies visual styling to the constructs it recognises.
///
/// Formatters are shared with host threads through the session, so they
/// must be `Send + Sync`.
pub trait Formatter: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Styles every construct found in `range`.
    ///
    /// `range` is expected to cover whole lines; the registry guarantees
    /// this. Formatting never fails: malformed markup is left unstyled.
    fn apply_formatting(&self, buffer: &mut StyledBuffer, range: Span);
}

/// Ordered set of formatters run on every edit.
pub struct FormatterRegistry {
    formatters: Vec<Box<dyn Formatter>>,
}

impl FormatterRegistry {
    pub fn new(formatters: Vec<Box<dyn Formatter>>) -> Self {
        Self { formatters }
    }

    /// The full wikitext formatter set in pass order.
    pub fn wikitext() -> Self {
        Self::new(vec![
            Box::new(BaseFormatter),
            Box::new(TemplateFormatter),
            Box::new(BoldItalicsFormatter),
            Box::new(ReferenceFormatter),
            Box::new(ListClassifier),
            Box::new(HeadingFormatter),
            Box::new(HtmlTagFormatter::strikethrough()),
            Box::new(HtmlTagFormatter::superscript()),
            Box::new(HtmlTagFormatter::subscript()),
            Box::new(HtmlTagFormatter::underline()),
            Box::new(LinkClassifier),
            Box::new(CommentFormatter),
        ])
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.name()).collect()
    }

    /// Re-formats the lines touched by `changed`.
    ///
    /// `changed` is usually [`Edit::changed`](crate::buffer::Edit::changed).
    /// The line following the change is included too, since inserting a
    /// line break leaves the second half of the old line behind it.
    ///
    /// Returns the span that was formatted.
    pub fn apply_formatting(&self, buffer: &mut StyledBuffer, changed: Span) -> Span {
        let changed = buffer.clamp(changed);
        let head = buffer.line_range(changed);
        let tail = buffer.line_range(Span::at(changed.end, 0));
        let range = Span::new(head.start.min(tail.start), head.end.max(tail.end));

        let started = Instant::now();
        for formatter in &self.formatters {
            log::trace!("formatter {} over {:?}", formatter.name(), range);
            formatter.apply_formatting(buffer, range);
        }
        log::debug!(
            "formatted {} bytes ({} formatters) in {:?}",
            range.len(),
            self.formatters.len(),
            started.elapsed()
        );
        range
    }

    /// Formats the whole buffer.
    pub fn format_all(&self, buffer: &mut StyledBuffer) -> Span {
        let all = Span::new(0, buffer.len());
        self.apply_formatting(buffer, all)
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::wikitext()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Attribute, AttributeKey, ColorRole, ContentKind};
    use pretty_assertions::assert_eq;

    fn formatted(text: &str) -> StyledBuffer {
        let mut buf = StyledBuffer::new(text);
        FormatterRegistry::wikitext().format_all(&mut buf);
        buf
    }

    #[test]
    fn registry_runs_in_pass_order() {
        assert_eq!(
            FormatterRegistry::wikitext().names(),
            vec![
                "base",
                "template",
                "bold_italics",
                "reference",
                "list",
                "heading",
                "html_tag:s",
                "html_tag:sup",
                "html_tag:sub",
                "html_tag:u",
                "link",
                "comment",
            ]
        );
    }

    #[test]
    fn reformatting_is_idempotent() {
        let text = "== Intro ==\n* '''[[A|b]]''' {{cite|[[X|[[Y]]]]}}\n<!-- [[hidden]] -->\n";
        let mut buf = formatted(text);
        let before = buf.attributes().clone();
        FormatterRegistry::wikitext().format_all(&mut buf);
        assert_eq!(buf.attributes(), &before);
    }

    #[test]
    fn partial_pass_matches_full_pass() {
        let mut edited = formatted("* one\n[[Link]] here\nplain\n");
        let edit = edited.replace(Span::new(8, 12), "Other");
        FormatterRegistry::wikitext().apply_formatting(&mut edited, edit.changed);

        let fresh = formatted(&edited.text());
        assert_eq!(edited.attributes(), fresh.attributes());
    }

    #[test]
    fn splitting_a_link_clears_both_halves() {
        let mut buf = formatted("see [[Page]]\n");
        let edit = buf.replace(Span::new(8, 8), "\n");
        FormatterRegistry::wikitext().apply_formatting(&mut buf, edit.changed);

        assert_eq!(buf.text(), "see [[Pa\nge]]\n");
        let link = AttributeKey::Content(ContentKind::SimpleLink);
        assert!(buf.runs(link).is_empty());
        assert_eq!(
            buf.attribute_at(11, AttributeKey::Foreground),
            Some(Attribute::Foreground(ColorRole::Base))
        );
    }

    #[test]
    fn joining_lines_completes_a_link() {
        let mut buf = formatted("[[Pa\nge]]");
        let edit = buf.replace(Span::new(4, 5), "");
        let range = FormatterRegistry::wikitext().apply_formatting(&mut buf, edit.changed);

        assert_eq!(range, Span::new(0, 8));
        assert!(
            buf.has_attribute_throughout(Span::new(0, 8), Attribute::Content(ContentKind::SimpleLink))
        );
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let buf = formatted("");
        assert_eq!(buf.attributes().iter().count(), 0);
    }

    #[test]
    fn out_of_bounds_change_is_clamped() {
        let mut buf = StyledBuffer::new("[[A]]");
        let range = FormatterRegistry::wikitext().apply_formatting(&mut buf, Span::new(3, 40));
        assert_eq!(range, Span::new(0, 5));
    }
}
