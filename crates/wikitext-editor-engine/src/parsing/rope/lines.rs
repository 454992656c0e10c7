use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text as a string, newline included.
    pub text: String,
}

impl LineRef {
    /// Span of the line without its trailing `\n` / `\r\n`.
    pub fn content_span(&self) -> Span {
        let trimmed = self.text.trim_end_matches(['\r', '\n']);
        Span {
            start: self.span.start,
            end: self.span.start + trimmed.len(),
        }
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which is important for
/// accurate span tracking when formatting passes work line by line.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// Lines whose span overlaps `range`, or which contain an empty `range`.
///
/// An empty range at the very end of a buffer ending in `\n` selects
/// nothing, since there is no line there yet.
pub fn lines_touching(rope: &Rope, range: Span) -> impl Iterator<Item = LineRef> + '_ {
    lines_with_spans(rope).filter(move |line| {
        if range.is_empty() {
            line.span.contains(range.start)
                || (range.start == line.span.end && !line.text.ends_with('\n'))
        } else {
            line.span.overlaps(range)
        }
    })
}
