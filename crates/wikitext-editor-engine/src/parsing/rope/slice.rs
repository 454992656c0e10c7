use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// The span is clamped to the rope bounds first, so a stale span from before
/// an edit never panics. This allocates; prefer working with spans where
/// possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    let sp = sp.clamp_to(rope.len());
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Used for the `--classify` listing.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let mut s = slice_to_string(rope, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
