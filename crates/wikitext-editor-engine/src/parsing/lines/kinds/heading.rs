/// Section heading line: `== Title ==` through `====== Title ======`.
pub struct Heading;

impl Heading {
    pub const MARK: char = '=';
    pub const MIN_LEVEL: usize = 2;
    pub const MAX_LEVEL: usize = 6;

    /// Parses a heading line (without its line ending).
    ///
    /// Both sides need the same number of `=`; the title must be non-blank
    /// and contain no `=`. Trailing whitespace after the closing run is
    /// allowed.
    ///
    /// Returns the level (2..=6), which is also the byte length of each
    /// `=` run, or `None` if the line is not a heading.
    pub fn parse(line: &str) -> Option<usize> {
        let t = line.trim_end();
        let open = t.chars().take_while(|&c| c == Self::MARK).count();
        let close = t.chars().rev().take_while(|&c| c == Self::MARK).count();
        if open != close || open + close >= t.len() {
            return None;
        }
        if !(Self::MIN_LEVEL..=Self::MAX_LEVEL).contains(&open) {
            return None;
        }
        let title = &t[open..t.len() - close];
        if title.trim().is_empty() || title.contains(Self::MARK) {
            return None;
        }
        Some(open)
    }
}
