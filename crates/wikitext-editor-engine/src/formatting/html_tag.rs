use crate::buffer::{Attribute, ColorRole, ContentKind, StyledBuffer};
use crate::parsing::rope::Span;

use super::Formatter;

/// Inline HTML formatting tags such as `<s>struck</s>`.
///
/// One formatter per tag; the registry holds a variant for each of
/// `<s>`, `<sup>`, `<sub>` and `<u>`. Tag names match case-insensitively and
/// must open and close on the same line. Tags with attributes are not
/// recognised.
pub struct HtmlTagFormatter {
    name: &'static str,
    open: &'static str,
    close: &'static str,
    kind: ContentKind,
}

impl HtmlTagFormatter {
    pub fn strikethrough() -> Self {
        Self {
            name: "html_tag:s",
            open: "<s>",
            close: "</s>",
            kind: ContentKind::Strikethrough,
        }
    }

    pub fn superscript() -> Self {
        Self {
            name: "html_tag:sup",
            open: "<sup>",
            close: "</sup>",
            kind: ContentKind::Superscript,
        }
    }

    pub fn subscript() -> Self {
        Self {
            name: "html_tag:sub",
            open: "<sub>",
            close: "</sub>",
            kind: ContentKind::Subscript,
        }
    }

    pub fn underline() -> Self {
        Self {
            name: "html_tag:u",
            open: "<u>",
            close: "</u>",
            kind: ContentKind::Underline,
        }
    }

    /// `(open tag, content, close tag)` spans of each element in `line`.
    fn elements(&self, base: usize, line: &str) -> Vec<(Span, Span, Span)> {
        // ASCII lowering keeps byte offsets intact
        let lower = line.to_ascii_lowercase();
        let mut out = vec![];
        let mut from = 0;
        while let Some(rel) = lower[from..].find(self.open) {
            let open = Span::at(from + rel, self.open.len());
            let Some(rel) = lower[open.end..].find(self.close) else {
                break;
            };
            let close = Span::at(open.end + rel, self.close.len());
            let content = Span::new(open.end, close.start);
            out.push((open.shift(base), content.shift(base), close.shift(base)));
            from = close.end;
        }
        out
    }
}

impl Formatter for HtmlTagFormatter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply_formatting(&self, buffer: &mut StyledBuffer, range: Span) {
        for line in buffer.lines_touching(range) {
            for (open, content, close) in self.elements(line.span.start, &line.text) {
                buffer.set_attribute(open, Attribute::Foreground(ColorRole::Green));
                buffer.set_attribute(close, Attribute::Foreground(ColorRole::Green));
                buffer.set_attribute(content, Attribute::Content(self.kind));
            }
        }
    }
}
