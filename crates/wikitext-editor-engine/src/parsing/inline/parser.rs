use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Comment, Delimiters},
    types::{CommentNode, PairNode},
};

/// An open delimiter waiting for its close.
struct Frame {
    start: usize,
    separator: Option<usize>,
    children: Vec<PairNode>,
}

/// Scans `s` for balanced, possibly nested delimiter pairs.
///
/// # Arguments
/// - `base`: Byte offset in the buffer where `s` begins (for absolute spans)
/// - `s`: The text to scan, usually one line or a classifier's range
/// - `delims`: Which construct to look for ([`WikiLink`](super::kinds::WikiLink),
///   [`Template`](super::kinds::Template))
///
/// # Rules
/// - Opens and closes pair innermost-first, left to right.
/// - Pairs never span a newline; anything open at a newline is abandoned.
/// - A pair whose head is blank (`[[]]`, `[[|x]]`) is not a pair.
/// - Comments are raw zones and skipped whole.
/// - When an outer open is abandoned, the complete pairs inside it are
///   promoted one level up, so `[[a [[b]]` still yields `[[b]]`.
///
/// # Returns
/// The outermost complete pairs in source order, with nested pairs in
/// [`PairNode::children`].
pub fn scan_pairs(base: usize, s: &str, delims: &Delimiters) -> Vec<PairNode> {
    let mut cur = Cursor::new(s, base);
    let mut stack: Vec<Frame> = vec![];
    let mut out = vec![];

    while !cur.eof() {
        if try_skip_comment(&mut cur) {
            continue;
        }
        if cur.peek() == Some(b'\n') {
            abandon_all(&mut stack, &mut out);
            cur.bump();
            continue;
        }
        if cur.starts_with(delims.open) {
            stack.push(Frame {
                start: cur.pos(),
                separator: None,
                children: vec![],
            });
            cur.bump_n(delims.open.len());
            continue;
        }
        if cur.starts_with(delims.close)
            && let Some(frame) = stack.pop()
        {
            cur.bump_n(delims.close.len());
            match close_frame(&cur, frame, delims) {
                Ok(node) => attach(&mut stack, &mut out, node),
                Err(frame) => abandon(&mut stack, &mut out, frame),
            }
            continue;
        }
        if cur.peek() == Some(delims.separator)
            && let Some(top) = stack.last_mut()
        {
            top.separator.get_or_insert(cur.pos());
        }
        cur.bump();
    }

    abandon_all(&mut stack, &mut out);
    out
}

/// Builds the node for a frame whose close delimiter was just consumed.
///
/// Gives the frame back if its head is blank.
fn close_frame(cur: &Cursor<'_>, frame: Frame, delims: &Delimiters) -> Result<PairNode, Frame> {
    let end = cur.pos();
    let inner = Span {
        start: frame.start + delims.open.len(),
        end: end - delims.close.len(),
    };
    let head = Span {
        start: inner.start,
        end: frame.separator.unwrap_or(inner.end),
    };
    if cur.text(head.start, head.end).trim().is_empty() {
        return Err(frame);
    }
    let tail = frame.separator.map(|sep| Span {
        start: sep + 1,
        end: inner.end,
    });

    Ok(PairNode {
        full: Span {
            start: frame.start,
            end,
        },
        inner,
        head,
        tail,
        children: frame.children,
    })
}

fn attach(stack: &mut [Frame], out: &mut Vec<PairNode>, node: PairNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => out.push(node),
    }
}

fn abandon(stack: &mut [Frame], out: &mut Vec<PairNode>, frame: Frame) {
    for child in frame.children {
        attach(stack, out, child);
    }
}

fn abandon_all(stack: &mut Vec<Frame>, out: &mut Vec<PairNode>) {
    while let Some(frame) = stack.pop() {
        abandon(stack, out, frame);
    }
}

/// Finds every complete comment in `s`.
///
/// A comment must close on the line it opens on; an unclosed `<!--` is
/// plain text.
pub fn scan_comments(base: usize, s: &str) -> Vec<CommentNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(node) = try_parse_comment(&mut cur) {
            out.push(node);
            continue;
        }
        cur.bump();
    }
    out
}

/// Attempts to parse a comment at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_comment(cur: &mut Cursor<'_>) -> Option<CommentNode> {
    if !cur.starts_with(Comment::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Comment::OPEN.len());
    let inner_start = cur.pos();

    if !cur.seek_on_line(Comment::CLOSE) {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(Comment::CLOSE.len());

    Some(CommentNode {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

fn try_skip_comment(cur: &mut Cursor<'_>) -> bool {
    try_parse_comment(cur).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::kinds::{Template, WikiLink};

    fn links(s: &str) -> Vec<PairNode> {
        scan_pairs(0, s, &WikiLink::DELIMITERS)
    }

    #[test]
    fn plain_text_has_no_pairs() {
        assert!(links("just words").is_empty());
    }

    #[test]
    fn simple_link() {
        let nodes = links("[[Page]]");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].full, Span::new(0, 8));
        assert_eq!(nodes[0].head, Span::new(2, 6));
        assert_eq!(nodes[0].tail, None);
        assert!(!nodes[0].has_nested());
    }

    #[test]
    fn link_with_label() {
        let nodes = links("[[Page|text]]");
        assert_eq!(nodes[0].head, Span::new(2, 6));
        assert_eq!(nodes[0].tail, Some(Span::new(7, 11)));
    }

    #[test]
    fn nested_link_is_a_child() {
        let nodes = links("[[Page|[[Inner]]]]");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].full, Span::new(0, 18));
        assert_eq!(nodes[0].children.len(), 1);
        assert_eq!(nodes[0].children[0].full, Span::new(7, 16));
        assert_eq!(nodes[0].children[0].head, Span::new(9, 14));
    }

    #[test]
    fn separator_inside_child_does_not_split_parent() {
        let nodes = links("[[File:A.jpg [[B|c]] d|e]]");
        assert_eq!(nodes[0].head, Span::new(2, 22));
        assert_eq!(nodes[0].tail, Some(Span::new(23, 24)));
    }

    #[test]
    fn siblings_stay_top_level() {
        let nodes = links("[[A]] and [[B]]");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].full, Span::new(10, 15));
    }

    #[test]
    fn unterminated_outer_promotes_inner() {
        let nodes = links("[[Page|[[Inner]]");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].full, Span::new(7, 16));
    }

    #[test]
    fn pairs_do_not_cross_newlines() {
        assert!(links("[[Pa\nge]]").is_empty());
    }

    #[test]
    fn blank_head_is_not_a_link() {
        assert!(links("[[]]").is_empty());
        assert!(links("[[ |label]]").is_empty());
    }

    #[test]
    fn comments_are_raw_zones() {
        assert!(links("<!-- [[Hidden]] -->").is_empty());
        assert_eq!(links("<!-- x --> [[Shown]]").len(), 1);
    }

    #[test]
    fn base_offset_is_applied() {
        let nodes = scan_pairs(40, "{{cite|x}}", &Template::DELIMITERS);
        assert_eq!(nodes[0].full, Span::new(40, 50));
        assert_eq!(nodes[0].head, Span::new(42, 46));
    }

    #[test]
    fn descendants_walks_all_depths() {
        let nodes = links("[[A|[[B|[[C]]]]]]");
        let inner: Vec<Span> = nodes[0].descendants().iter().map(|n| n.full).collect();
        assert_eq!(inner, vec![Span::new(4, 15), Span::new(8, 13)]);
    }

    #[test]
    fn comment_spans() {
        let nodes = scan_comments(0, "a <!-- note --> b");
        assert_eq!(
            nodes,
            vec![CommentNode {
                full: Span::new(2, 15),
                inner: Span::new(6, 12),
            }]
        );
    }

    #[test]
    fn unclosed_comment_is_text() {
        assert!(scan_comments(0, "<!-- open\n-->").is_empty());
    }
}
