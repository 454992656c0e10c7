use crate::buffer::{Attribute, ColorRole, ContentKind, FontRole, StyledBuffer};
use crate::parsing::rope::Span;

use super::Formatter;

/// Apostrophe emphasis: `''italics''`, `'''bold'''`, `'''''both'''''`.
///
/// Runs are paired left to right within a line; an unpaired run stays plain.
pub struct BoldItalicsFormatter;

impl BoldItalicsFormatter {
    pub const MARK: u8 = b'\'';
}

/// One apostrophe run, normalised to 2, 3 or 5 marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Toggle {
    marker: Span,
    bold: bool,
    italics: bool,
}

/// Finds the emphasis toggles in `line`.
///
/// A run of 4 is an apostrophe followed by bold; runs longer than 5 keep
/// their leading extras as literal apostrophes.
fn toggles(base: usize, line: &str) -> Vec<Toggle> {
    let b = line.as_bytes();
    let mut out = vec![];
    let mut i = 0;
    while i < b.len() {
        if b[i] != BoldItalicsFormatter::MARK {
            i += 1;
            continue;
        }
        let start = i;
        while i < b.len() && b[i] == BoldItalicsFormatter::MARK {
            i += 1;
        }
        let (literal, marks) = match i - start {
            1 => continue,
            n @ (2 | 3 | 5) => (0, n),
            4 => (1, 3),
            n => (n - 5, 5),
        };
        out.push(Toggle {
            marker: Span::at(base + start + literal, marks),
            bold: marks != 2,
            italics: marks != 3,
        });
    }
    out
}

/// Pairs consecutive markers into `(open, close)`.
fn pairs(markers: impl Iterator<Item = Span>) -> Vec<(Span, Span)> {
    let markers: Vec<Span> = markers.collect();
    markers.chunks_exact(2).map(|p| (p[0], p[1])).collect()
}

impl Formatter for BoldItalicsFormatter {
    fn name(&self) -> &'static str {
        "bold_italics"
    }

    fn apply_formatting(&self, buffer: &mut StyledBuffer, range: Span) {
        for line in buffer.lines_touching(range) {
            let found = toggles(line.span.start, &line.text);
            let bold = pairs(found.iter().filter(|t| t.bold).map(|t| t.marker));
            let italics = pairs(found.iter().filter(|t| t.italics).map(|t| t.marker));

            for &(open, close) in bold.iter().chain(&italics) {
                buffer.set_attribute(open, Attribute::Foreground(ColorRole::Orange));
                buffer.set_attribute(close, Attribute::Foreground(ColorRole::Orange));
            }

            let bold_text: Vec<Span> = bold.iter().map(|&(o, c)| Span::new(o.end, c.start)).collect();
            let italic_text: Vec<Span> = italics.iter().map(|&(o, c)| Span::new(o.end, c.start)).collect();

            for &text in &bold_text {
                buffer.set_attribute(text, Attribute::Content(ContentKind::Bold));
                buffer.set_attribute(text, Attribute::Font(FontRole::Bold));
            }
            for &text in &italic_text {
                buffer.set_attribute(text, Attribute::Content(ContentKind::Italics));
                buffer.set_attribute(text, Attribute::Font(FontRole::Italics));
            }
            for b in &bold_text {
                for i in &italic_text {
                    if let Some(both) = b.intersect(*i) {
                        buffer.set_attribute(both, Attribute::Font(FontRole::BoldItalics));
                    }
                }
            }
        }
    }
}
