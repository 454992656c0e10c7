use super::Delimiters;

/// Internal wiki link: `[[Target]]` or `[[Target|label]]`.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const LABEL: u8 = b'|';

    pub const DELIMITERS: Delimiters = Delimiters {
        open: Self::OPEN,
        close: Self::CLOSE,
        separator: Self::LABEL,
    };
}
