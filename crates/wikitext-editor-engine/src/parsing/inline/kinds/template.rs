use super::Delimiters;

/// Template transclusion: `{{Name}}` or `{{Name|param|key=value}}`.
pub struct Template;

impl Template {
    pub const OPEN: &'static [u8; 2] = b"{{";
    pub const CLOSE: &'static [u8; 2] = b"}}";
    pub const PARAM: u8 = b'|';

    pub const DELIMITERS: Delimiters = Delimiters {
        open: Self::OPEN,
        close: Self::CLOSE,
        separator: Self::PARAM,
    };
}
