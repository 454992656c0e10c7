//! # Editor Session
//!
//! Owns one buffer and everything that styles it. Hosts (the terminal
//! editor, the mobile bindings) talk to the engine through this type.

use crate::buffer::{Edit, StyledBuffer};
use crate::find::{FindError, FindSession};
use crate::formatting::{FormatterRegistry, LinkClassifier, ListClassifier};
use crate::parsing::rope::Span;
use crate::selection::SelectionState;
use crate::style::{StyledRun, Theme};

pub struct EditorSession {
    buffer: StyledBuffer,
    registry: FormatterRegistry,
    theme: Theme,
    highlighting: bool,
    find: Option<FindSession>,
}

impl EditorSession {
    /// Creates a session and formats the whole text.
    pub fn new(text: &str) -> Self {
        Self::with_registry(text, FormatterRegistry::wikitext())
    }

    pub fn with_registry(text: &str, registry: FormatterRegistry) -> Self {
        let mut buffer = StyledBuffer::new(text);
        registry.format_all(&mut buffer);
        Self {
            buffer,
            registry,
            theme: Theme::default(),
            highlighting: true,
            find: None,
        }
    }

    pub fn buffer(&self) -> &StyledBuffer {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Replaces `span` with `text` and re-formats the lines it touched.
    ///
    /// An active find session is refreshed by ending it; the host restarts
    /// it if it still wants one.
    pub fn replace(&mut self, span: Span, text: &str) -> Edit {
        self.end_find();
        let edit = self.buffer.replace(span, text);
        self.registry.apply_formatting(&mut self.buffer, edit.changed);
        edit
    }

    pub fn selection_state(&self, range: Span) -> SelectionState {
        SelectionState::new(&self.buffer, range)
    }

    pub fn is_simple_link(&self, range: Span) -> bool {
        LinkClassifier.is_simple_link(&self.buffer, self.buffer.clamp(range))
    }

    pub fn is_link_with_nested_link(&self, range: Span) -> bool {
        LinkClassifier.is_link_with_nested_link(&self.buffer, self.buffer.clamp(range))
    }

    pub fn is_bullet_single(&self, range: Span) -> bool {
        ListClassifier.is_bullet_single(&self.buffer, self.buffer.clamp(range))
    }

    pub fn is_bullet_multiple(&self, range: Span) -> bool {
        ListClassifier.is_bullet_multiple(&self.buffer, self.buffer.clamp(range))
    }

    pub fn is_number_single(&self, range: Span) -> bool {
        ListClassifier.is_number_single(&self.buffer, self.buffer.clamp(range))
    }

    pub fn is_number_multiple(&self, range: Span) -> bool {
        ListClassifier.is_number_multiple(&self.buffer, self.buffer.clamp(range))
    }

    pub fn syntax_highlighting(&self) -> bool {
        self.highlighting
    }

    /// Toggles syntax colours and fonts. Attributes are kept either way, so
    /// selection state keeps working with highlighting off.
    pub fn set_syntax_highlighting(&mut self, enabled: bool) {
        log::debug!("syntax highlighting {}", if enabled { "on" } else { "off" });
        self.highlighting = enabled;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn styled_runs(&self) -> Vec<StyledRun> {
        self.theme.styled_runs(&self.buffer, self.highlighting)
    }

    // Find and replace

    pub fn find(&self) -> Option<&FindSession> {
        self.find.as_ref()
    }

    /// Starts a new search, replacing any running one.
    pub fn start_find(&mut self, query: &str) -> Result<usize, FindError> {
        self.end_find();
        let session = FindSession::start(&mut self.buffer, query)?;
        let count = session.match_count();
        self.find = Some(session);
        Ok(count)
    }

    pub fn find_next(&mut self, caret: usize) -> Option<Span> {
        self.find.as_mut()?.highlight_next(&mut self.buffer, caret)
    }

    pub fn find_previous(&mut self) -> Option<Span> {
        self.find.as_mut()?.highlight_previous(&mut self.buffer)
    }

    pub fn replace_current(&mut self, text: &str) -> Option<Edit> {
        let edit = self.find.as_mut()?.replace_single(&mut self.buffer, text)?;
        self.registry.apply_formatting(&mut self.buffer, edit.changed);
        Some(edit)
    }

    pub fn replace_all(&mut self, text: &str) -> Option<Span> {
        let changed = self.find.as_mut()?.replace_all(&mut self.buffer, text)?;
        self.registry.apply_formatting(&mut self.buffer, changed);
        Some(changed)
    }

    pub fn end_find(&mut self) {
        if let Some(find) = self.find.take() {
            find.end(&mut self.buffer);
        }
    }
}
