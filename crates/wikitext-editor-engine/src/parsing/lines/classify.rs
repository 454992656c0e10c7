use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{Heading, ListItem, ListKind};

/// The list-marker prefix of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPrefix {
    /// Kind of the outermost marker.
    pub kind: ListKind,
    /// Number of stacked markers (nesting levels).
    pub depth: usize,
    /// Span of the marker run.
    pub markers: Span,
}

/// The `=` runs of a heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine {
    /// Heading level, 2..=6.
    pub level: usize,
    pub open: Span,
    pub close: Span,
}

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently of its neighbours; wikitext line
/// constructs never depend on surrounding lines.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of the line, line ending included.
    pub line: Span,
    /// Span of the line without its line ending.
    pub content: Span,
    pub list: Option<ListPrefix>,
    pub heading: Option<HeadingLine>,
}

/// Classifies individual lines for the line-level formatters.
pub struct WikitextLineClassifier;

impl WikitextLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let content = lr.content_span();
        let text = &lr.text[..content.len()];

        LineClass {
            line: lr.span,
            content,
            list: list_prefix(content.start, text),
            heading: heading_line(content.start, text),
        }
    }
}

/// Reads the list prefix of `text`, which starts at absolute offset `base`.
pub fn list_prefix(base: usize, text: &str) -> Option<ListPrefix> {
    let (kind, depth) = ListItem::strip_markers(text);
    kind.map(|kind| ListPrefix {
        kind,
        depth,
        markers: Span::at(base, depth),
    })
}

fn heading_line(base: usize, text: &str) -> Option<HeadingLine> {
    let level = Heading::parse(text)?;
    let close_end = base + text.trim_end().len();
    Some(HeadingLine {
        level,
        open: Span::at(base, level),
        close: Span::new(close_end - level, close_end),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::rope::lines_with_spans;
    use xi_rope::Rope;

    fn classify_all(s: &str) -> Vec<LineClass> {
        let rope = Rope::from(s);
        lines_with_spans(&rope)
            .map(|lr| WikitextLineClassifier.classify(&lr))
            .collect()
    }

    #[test]
    fn list_line_has_marker_span() {
        let lines = classify_all("intro\n** nested\n");
        assert!(lines[0].list.is_none());
        assert_eq!(
            lines[1].list,
            Some(ListPrefix {
                kind: ListKind::Bullet,
                depth: 2,
                markers: Span::new(6, 8),
            })
        );
        assert_eq!(lines[1].content, Span::new(6, 15));
    }

    #[test]
    fn heading_line_has_both_runs() {
        let lines = classify_all("=== Plot === \nbody");
        let h = lines[0].heading.unwrap();
        assert_eq!(h.level, 3);
        assert_eq!(h.open, Span::new(0, 3));
        assert_eq!(h.close, Span::new(9, 12));
        assert!(lines[1].heading.is_none());
    }

    #[test]
    fn crlf_endings_are_not_content() {
        let lines = classify_all("# one\r\n# two");
        assert_eq!(lines[0].content, Span::new(0, 5));
        assert_eq!(lines[1].list.map(|l| l.markers), Some(Span::new(7, 8)));
    }
}
