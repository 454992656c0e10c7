use std::collections::BTreeMap;

use crate::parsing::rope::span::Span;

/// Semantic colour slots. The [`Theme`](crate::style::Theme) maps them to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    Base,
    Orange,
    Purple,
    Green,
    Blue,
    Gray,
    MatchForeground,
    MatchBackground,
    SelectedMatchBackground,
    ReplacedMatchBackground,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontRole {
    Base,
    Bold,
    Italics,
    BoldItalics,
    Heading,
    Subheading1,
    Subheading2,
    Subheading3,
    Subheading4,
}

/// What a range of source text *is*, independent of how it looks.
///
/// Formatters tag ranges with these so that selection state can be read
/// back without re-scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentKind {
    Bold,
    Italics,
    HorizontalTemplate,
    HorizontalReference,
    BulletSingle,
    BulletMultiple,
    NumberSingle,
    NumberMultiple,
    Heading,
    Subheading1,
    Subheading2,
    Subheading3,
    Subheading4,
    Strikethrough,
    Underline,
    Subscript,
    Superscript,
    SimpleLink,
    LinkWithNestedLink,
    Comment,
}

/// One styling fact attached to a range of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Foreground(ColorRole),
    Background(ColorRole),
    Font(FontRole),
    Content(ContentKind),
}

/// The slot an [`Attribute`] occupies. Each byte holds at most one
/// attribute per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKey {
    Foreground,
    Background,
    Font,
    Content(ContentKind),
}

impl Attribute {
    pub fn key(self) -> AttributeKey {
        match self {
            Attribute::Foreground(_) => AttributeKey::Foreground,
            Attribute::Background(_) => AttributeKey::Background,
            Attribute::Font(_) => AttributeKey::Font,
            Attribute::Content(kind) => AttributeKey::Content(kind),
        }
    }
}

impl AttributeKey {
    /// Keys owned by syntax highlighting (everything except find highlights).
    pub fn is_syntax(self) -> bool {
        !matches!(self, AttributeKey::Background)
    }
}

/// An attribute applied to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub span: Span,
    pub attribute: Attribute,
}

/// Attribute runs, kept per key.
///
/// # Invariants
///
/// - runs of one key are sorted by start and never overlap
/// - no run is empty
/// - touching runs with the same attribute are merged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRuns {
    by_key: BTreeMap<AttributeKey, Vec<Run>>,
}

impl AttributeRuns {
    /// Applies `attribute` over `span`, replacing whatever its key held there.
    pub fn set(&mut self, span: Span, attribute: Attribute) {
        if span.is_empty() {
            return;
        }
        self.remove(span, attribute.key());
        let runs = self.by_key.entry(attribute.key()).or_default();
        let at = runs.partition_point(|r| r.span.start < span.start);
        runs.insert(at, Run { span, attribute });
        coalesce(runs);
    }

    /// Removes the attribute stored under `key` from `span`, splitting runs
    /// that stick out on either side.
    pub fn remove(&mut self, span: Span, key: AttributeKey) {
        let Some(runs) = self.by_key.get_mut(&key) else {
            return;
        };
        if span.is_empty() {
            return;
        }
        let mut kept = Vec::with_capacity(runs.len() + 1);
        for run in runs.drain(..) {
            if !run.span.overlaps(span) {
                kept.push(run);
                continue;
            }
            if run.span.start < span.start {
                kept.push(Run {
                    span: Span::new(run.span.start, span.start),
                    ..run
                });
            }
            if run.span.end > span.end {
                kept.push(Run {
                    span: Span::new(span.end, run.span.end),
                    ..run
                });
            }
        }
        *runs = kept;
        if runs.is_empty() {
            self.by_key.remove(&key);
        }
    }

    /// Removes every syntax attribute (all keys but background) from `span`.
    pub fn clear_syntax(&mut self, span: Span) {
        let keys: Vec<AttributeKey> = self
            .by_key
            .keys()
            .copied()
            .filter(|k| k.is_syntax())
            .collect();
        for key in keys {
            self.remove(span, key);
        }
    }

    /// The attribute stored under `key` at `offset`.
    pub fn get(&self, offset: usize, key: AttributeKey) -> Option<Attribute> {
        let runs = self.by_key.get(&key)?;
        let at = runs.partition_point(|r| r.span.end <= offset);
        runs.get(at)
            .filter(|r| r.span.contains(offset))
            .map(|r| r.attribute)
    }

    /// Every attribute at `offset`, ordered by key.
    pub fn at(&self, offset: usize) -> Vec<Attribute> {
        self.by_key
            .keys()
            .filter_map(|&key| self.get(offset, key))
            .collect()
    }

    /// True if every byte of a non-empty `span` carries `attribute`.
    pub fn covers(&self, span: Span, attribute: Attribute) -> bool {
        if span.is_empty() {
            return false;
        }
        let Some(runs) = self.by_key.get(&attribute.key()) else {
            return false;
        };
        let mut pos = span.start;
        let first = runs.partition_point(|r| r.span.end <= pos);
        for run in &runs[first..] {
            if run.span.start > pos || run.attribute != attribute {
                return false;
            }
            pos = run.span.end;
            if pos >= span.end {
                return true;
            }
        }
        false
    }

    pub fn runs(&self, key: AttributeKey) -> &[Run] {
        self.by_key.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All runs, grouped by key and sorted by start within each key.
    pub fn iter(&self) -> impl Iterator<Item = &Run> {
        self.by_key.values().flatten()
    }

    /// Runs of every key that overlap `span`, clipped to it.
    pub fn within(&self, span: Span) -> Vec<Run> {
        self.iter()
            .filter_map(|run| {
                run.span.intersect(span).map(|clipped| Run {
                    span: clipped,
                    attribute: run.attribute,
                })
            })
            .collect()
    }

    /// Moves runs to follow a text replacement of `replaced` by
    /// `inserted_len` bytes.
    ///
    /// Runs before the edit stay put, runs after it shift. A run spanning
    /// the whole replaced region stretches over the inserted text; runs
    /// partly inside it are clipped.
    pub fn apply_edit(&mut self, replaced: Span, inserted_len: usize) {
        let (s, e) = (replaced.start, replaced.end);
        let map_start = |o: usize| {
            if o < s {
                o
            } else if o >= e {
                o - e + s + inserted_len
            } else {
                s + inserted_len
            }
        };
        let map_end = |o: usize| {
            if o <= s {
                o
            } else if o >= e {
                o - e + s + inserted_len
            } else {
                s
            }
        };

        for runs in self.by_key.values_mut() {
            for run in runs.iter_mut() {
                run.span = Span::new(map_start(run.span.start), map_end(run.span.end));
            }
            runs.retain(|r| !r.span.is_empty());
            coalesce(runs);
        }
        self.by_key.retain(|_, runs| !runs.is_empty());
    }
}

/// Merges touching neighbours that carry the same attribute.
fn coalesce(runs: &mut Vec<Run>) {
    let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs.drain(..) {
        match merged.last_mut() {
            Some(prev) if prev.attribute == run.attribute && prev.span.end == run.span.start => {
                prev.span.end = run.span.end;
            }
            _ => merged.push(run),
        }
    }
    *runs = merged;
}
