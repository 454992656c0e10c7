/// Whether a list marker is unordered or ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// `*`
    Bullet,
    /// `#`
    Number,
}

/// List item line type with owned marker constants.
///
/// All list-marker syntax knowledge lives here, not in the classifier or
/// the formatter.
pub struct ListItem;

impl ListItem {
    pub const BULLET: u8 = b'*';
    pub const NUMBER: u8 = b'#';

    /// Reads the marker run at the start of `s`.
    ///
    /// Only `*` and `#` count as markers; any other byte ends the run, so
    /// `:*` (an indented bullet) is not a list item here.
    ///
    /// # Returns
    /// - `kind`: kind of the first (outermost) marker; `None` if no run
    /// - `depth`: number of stacked markers
    ///
    /// Mixed runs take the first marker's kind: `*#` is a two-level bullet.
    pub fn strip_markers(s: &str) -> (Option<ListKind>, usize) {
        let b = s.as_bytes();
        let depth = b
            .iter()
            .take_while(|&&c| c == Self::BULLET || c == Self::NUMBER)
            .count();
        let kind = b.first().and_then(|&c| match c {
            Self::BULLET => Some(ListKind::Bullet),
            Self::NUMBER => Some(ListKind::Number),
            _ => None,
        });
        (kind, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_list() {
        assert_eq!(ListItem::strip_markers("plain"), (None, 0));
        assert_eq!(ListItem::strip_markers(""), (None, 0));
    }

    #[test]
    fn strip_single_bullet() {
        assert_eq!(
            ListItem::strip_markers("* item"),
            (Some(ListKind::Bullet), 1)
        );
    }

    #[test]
    fn strip_stacked_numbers() {
        assert_eq!(
            ListItem::strip_markers("### deep"),
            (Some(ListKind::Number), 3)
        );
    }

    #[test]
    fn mixed_run_takes_first_kind() {
        assert_eq!(ListItem::strip_markers("*#x"), (Some(ListKind::Bullet), 2));
        assert_eq!(ListItem::strip_markers("#*x"), (Some(ListKind::Number), 2));
    }

    #[test]
    fn indent_prefix_is_not_a_marker() {
        assert_eq!(ListItem::strip_markers(":* x"), (None, 0));
    }

    #[test]
    fn space_ends_the_run() {
        assert_eq!(
            ListItem::strip_markers("* * x"),
            (Some(ListKind::Bullet), 1)
        );
    }
}
