use crate::parsing::rope::span::Span;

/// A complete, balanced delimiter pair such as `[[...]]` or `{{...}}`.
///
/// All fields are absolute byte spans into the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairNode {
    /// Full span including both delimiters.
    pub full: Span,
    /// Content between the delimiters.
    pub inner: Span,
    /// Content before the first separator at this pair's depth
    /// (link target, template name).
    pub head: Span,
    /// Content after that separator (link label, template params).
    pub tail: Option<Span>,
    /// Complete pairs nested strictly inside `inner`, in source order.
    pub children: Vec<PairNode>,
}

impl PairNode {
    /// True if another complete pair of the same kind is nested inside.
    pub fn has_nested(&self) -> bool {
        !self.children.is_empty()
    }

    /// Every pair nested at any depth below this one, in source order.
    pub fn descendants(&self) -> Vec<&PairNode> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }
}

/// An HTML comment `<!-- ... -->`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentNode {
    /// Full span including `<!--` and `-->`.
    pub full: Span,
    /// Comment body.
    pub inner: Span,
}
