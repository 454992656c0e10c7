/// HTML comment. A raw zone: no other markup is recognised inside it.
pub struct Comment;

impl Comment {
    pub const OPEN: &'static [u8; 4] = b"<!--";
    pub const CLOSE: &'static [u8; 3] = b"-->";
}
