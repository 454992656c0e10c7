//! # Find and Replace
//!
//! Case-insensitive literal search over a [`StyledBuffer`], with matches
//! highlighted through background attributes. Formatting passes never
//! clear backgrounds, so highlights survive re-formatting.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::buffer::{Attribute, AttributeKey, ColorRole, Edit, StyledBuffer};
use crate::parsing::rope::Span;

#[derive(Debug, Error)]
pub enum FindError {
    #[error("Search query is empty")]
    EmptyQuery,
    #[error("Search query could not be compiled: {0}")]
    Pattern(#[from] regex::Error),
}

const MATCH: Attribute = Attribute::Background(ColorRole::MatchBackground);
const SELECTED: Attribute = Attribute::Background(ColorRole::SelectedMatchBackground);
const REPLACED: Attribute = Attribute::Background(ColorRole::ReplacedMatchBackground);

/// An active search. Dropping the session without calling [`end`](Self::end)
/// leaves its highlights in the buffer.
#[derive(Debug)]
pub struct FindSession {
    query: String,
    pattern: Regex,
    matches: Vec<Span>,
    current: Option<usize>,
}

impl FindSession {
    /// Starts a search for `query` and highlights every match.
    pub fn start(buffer: &mut StyledBuffer, query: &str) -> Result<Self, FindError> {
        if query.is_empty() {
            return Err(FindError::EmptyQuery);
        }
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()?;
        let mut session = Self {
            query: query.to_string(),
            pattern,
            matches: vec![],
            current: None,
        };
        session.refresh(buffer);
        log::debug!("find {:?}: {} matches", session.query, session.matches.len());
        Ok(session)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn matches(&self) -> &[Span] {
        &self.matches
    }

    /// The selected match and its zero-based index.
    pub fn current_match(&self) -> Option<(usize, Span)> {
        self.current.map(|i| (i, self.matches[i]))
    }

    /// Selects the match after the current one, wrapping at the end.
    ///
    /// With nothing selected yet, selects the first match starting at or
    /// after `caret`.
    pub fn highlight_next(&mut self, buffer: &mut StyledBuffer, caret: usize) -> Option<Span> {
        let n = self.matches.len();
        if n == 0 {
            return None;
        }
        let next = match self.current {
            Some(i) => (i + 1) % n,
            None => self
                .matches
                .iter()
                .position(|m| m.start >= caret)
                .unwrap_or(0),
        };
        self.select(buffer, next)
    }

    /// Selects the match before the current one, wrapping at the start.
    ///
    /// With nothing selected yet, selects the last match.
    pub fn highlight_previous(&mut self, buffer: &mut StyledBuffer) -> Option<Span> {
        let n = self.matches.len();
        if n == 0 {
            return None;
        }
        let previous = match self.current {
            Some(i) => (i + n - 1) % n,
            None => n - 1,
        };
        self.select(buffer, previous)
    }

    /// Replaces the selected match with `text` and selects the next one.
    ///
    /// Returns the edit so the caller can re-format, or `None` when no
    /// match is selected.
    pub fn replace_single(&mut self, buffer: &mut StyledBuffer, text: &str) -> Option<Edit> {
        let (_, target) = self.current_match()?;
        let edit = buffer.replace(target, text);
        buffer.set_attribute(edit.changed, REPLACED);
        self.refresh(buffer);
        log::debug!("replaced match at {:?}", target);

        if let Some(next) = self.matches.iter().position(|m| m.start >= edit.changed.end) {
            self.select(buffer, next);
        } else if !self.matches.is_empty() {
            self.select(buffer, 0);
        }
        Some(edit)
    }

    /// Replaces every match with `text`.
    ///
    /// Returns the span, in the edited buffer, running from the first
    /// replacement to the end of the last, or `None` if nothing matched.
    pub fn replace_all(&mut self, buffer: &mut StyledBuffer, text: &str) -> Option<Span> {
        let (first, last) = (*self.matches.first()?, *self.matches.last()?);
        let tail_len = buffer.len() - last.end;
        let replaced = self.matches.clone();

        for target in replaced.iter().rev() {
            buffer.replace(*target, text);
        }
        let (mut added, mut removed) = (0, 0);
        for target in &replaced {
            let start = target.start + added - removed;
            buffer.set_attribute(Span::at(start, text.len()), REPLACED);
            added += text.len();
            removed += target.len();
        }
        log::debug!("replaced {} matches of {:?}", replaced.len(), self.query);

        self.refresh(buffer);
        Some(Span::new(first.start, buffer.len() - tail_len))
    }

    /// Removes every find highlight, replacement marks included.
    pub fn end(self, buffer: &mut StyledBuffer) {
        let all = Span::new(0, buffer.len());
        buffer.remove_attribute(all, AttributeKey::Background);
        log::debug!("find {:?} ended", self.query);
    }

    fn select(&mut self, buffer: &mut StyledBuffer, index: usize) -> Option<Span> {
        if let Some((_, old)) = self.current_match() {
            buffer.set_attribute(old, MATCH);
        }
        let span = *self.matches.get(index)?;
        buffer.set_attribute(span, SELECTED);
        self.current = Some(index);
        Some(span)
    }

    /// Re-runs the search and redraws match highlights.
    ///
    /// Replacement marks are kept. Clears the selection.
    fn refresh(&mut self, buffer: &mut StyledBuffer) {
        let stale: Vec<Span> = buffer
            .runs(AttributeKey::Background)
            .iter()
            .filter(|r| r.attribute == MATCH || r.attribute == SELECTED)
            .map(|r| r.span)
            .collect();
        for span in stale {
            buffer.remove_attribute(span, AttributeKey::Background);
        }

        let text = buffer.text();
        self.matches = self
            .pattern
            .find_iter(&text)
            .map(|m| Span::new(m.start(), m.end()))
            .collect();
        self.current = None;
        for &span in &self.matches {
            buffer.set_attribute(span, MATCH);
        }
    }
}
