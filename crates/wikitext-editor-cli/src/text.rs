//! Caret arithmetic on the editor text. Offsets are byte offsets on char
//! boundaries, matching the engine's spans.

use wikitext_editor_engine::Span;

pub fn prev_boundary(text: &str, i: usize) -> usize {
    text[..i].chars().next_back().map_or(0, |c| i - c.len_utf8())
}

pub fn next_boundary(text: &str, i: usize) -> usize {
    text[i..].chars().next().map_or(i, |c| i + c.len_utf8())
}

pub fn line_start(text: &str, i: usize) -> usize {
    text[..i].rfind('\n').map_or(0, |p| p + 1)
}

pub fn line_end(text: &str, i: usize) -> usize {
    text[i..].find('\n').map_or(text.len(), |p| i + p)
}

/// Zero-based `(line, column)` of `i`, the column counted in chars.
pub fn line_col(text: &str, i: usize) -> (usize, usize) {
    let start = line_start(text, i);
    let line = text[..start].matches('\n').count();
    (line, text[start..i].chars().count())
}

/// Offset of char column `col` on the line starting at `start`, clamped
/// to the line end.
fn offset_at_column(text: &str, start: usize, col: usize) -> usize {
    let end = line_end(text, start);
    text[start..end]
        .char_indices()
        .nth(col)
        .map_or(end, |(o, _)| start + o)
}

pub fn line_up(text: &str, i: usize) -> usize {
    let start = line_start(text, i);
    if start == 0 {
        return i;
    }
    let (_, col) = line_col(text, i);
    offset_at_column(text, line_start(text, start - 1), col)
}

pub fn line_down(text: &str, i: usize) -> usize {
    let end = line_end(text, i);
    if end == text.len() {
        return i;
    }
    let (_, col) = line_col(text, i);
    offset_at_column(text, end + 1, col)
}

/// The word touching `i`: alphanumerics on either side of the caret.
pub fn word_at(text: &str, i: usize) -> Option<Span> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let start = text[..i]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_word(c))
        .last()
        .map_or(i, |(o, _)| o);
    let end = text[i..]
        .char_indices()
        .find(|&(_, c)| !is_word(c))
        .map_or(text.len(), |(o, _)| i + o);
    (start < end).then(|| Span::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_step_over_multibyte_chars() {
        let text = "née";
        assert_eq!(next_boundary(text, 1), 3);
        assert_eq!(prev_boundary(text, 3), 1);
        assert_eq!(prev_boundary(text, 0), 0);
        assert_eq!(next_boundary(text, 4), 4);
    }

    #[test]
    fn line_navigation_keeps_column() {
        let text = "abcd\nxy\n12345";
        assert_eq!(line_col(text, 11), (2, 3));
        assert_eq!(line_up(text, 11), 7);
        assert_eq!(line_up(text, 7), 2);
        assert_eq!(line_up(text, 2), 2);
        assert_eq!(line_down(text, 3), 7);
        assert_eq!(line_down(text, 13), 13);
    }

    #[test]
    fn word_under_caret() {
        let text = "see [[Ada Lovelace]]";
        assert_eq!(word_at(text, 8), Some(Span::new(6, 9)));
        assert_eq!(word_at(text, 9), Some(Span::new(6, 9)));
        assert_eq!(word_at(text, 6), Some(Span::new(6, 9)));
        assert_eq!(word_at(text, 4), None);
    }
}
