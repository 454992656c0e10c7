//! UniFFI bindings for wikitext-editor mobile apps
//!
//! Exposes one editing session per [`EditorHandle`]. The host keeps the
//! text view, forwards every edit, and repaints from [`EditorHandle::styled_runs`].
//!
//! Offsets and lengths are UTF-8 byte offsets into the session text.

use std::sync::{Mutex, MutexGuard};

use wikitext_editor_engine::{
    EditorSession, FindError, SelectionState, Span, StyledRun, Theme,
};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Find error: {reason}")]
    FindError { reason: String },
}

impl From<FindError> for FfiError {
    fn from(e: FindError) -> Self {
        FfiError::FindError {
            reason: e.to_string(),
        }
    }
}

// ============ Editor Handle ============

/// A handle to a formatted wikitext editing session.
#[derive(uniffi::Object)]
pub struct EditorHandle {
    inner: Mutex<EditorSession>,
}

impl EditorHandle {
    fn session(&self) -> MutexGuard<'_, EditorSession> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Host offsets beyond the address space saturate; the session clamps them.
fn offset(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn span(start: u64, len: u64) -> Span {
    Span::at(offset(start), offset(len))
}

#[uniffi::export]
impl EditorHandle {
    /// Create a session from wikitext and run a full formatting pass.
    #[uniffi::constructor]
    pub fn from_string(content: String) -> Self {
        Self {
            inner: Mutex::new(EditorSession::new(&content)),
        }
    }

    pub fn get_text(&self) -> String {
        self.session().text()
    }

    /// Replace `len` bytes at `start` with `text` and re-format the touched lines.
    pub fn replace(&self, start: u64, len: u64, text: String) -> EditDto {
        let edit = self.session().replace(span(start, len), &text);
        EditDto {
            start: edit.changed.start as u64,
            len: edit.changed.len() as u64,
            version: edit.version,
        }
    }

    /// Toolbar state for a caret (`len == 0`) or selection.
    pub fn selection_state(&self, start: u64, len: u64) -> SelectionStateDto {
        SelectionStateDto::from_engine(self.session().selection_state(span(start, len)))
    }

    /// Fully resolved styles covering the whole text.
    pub fn styled_runs(&self) -> Vec<StyledRunDto> {
        self.session()
            .styled_runs()
            .into_iter()
            .map(StyledRunDto::from_engine)
            .collect()
    }

    pub fn set_syntax_highlighting(&self, enabled: bool) {
        self.session().set_syntax_highlighting(enabled);
    }

    pub fn set_dark_theme(&self, dark: bool) {
        let theme = if dark { Theme::dark() } else { Theme::light() };
        self.session().set_theme(theme);
    }

    pub fn is_simple_link(&self, start: u64, len: u64) -> bool {
        self.session().is_simple_link(span(start, len))
    }

    pub fn is_link_with_nested_link(&self, start: u64, len: u64) -> bool {
        self.session().is_link_with_nested_link(span(start, len))
    }

    pub fn is_bullet_single(&self, start: u64, len: u64) -> bool {
        self.session().is_bullet_single(span(start, len))
    }

    pub fn is_bullet_multiple(&self, start: u64, len: u64) -> bool {
        self.session().is_bullet_multiple(span(start, len))
    }

    pub fn is_number_single(&self, start: u64, len: u64) -> bool {
        self.session().is_number_single(span(start, len))
    }

    pub fn is_number_multiple(&self, start: u64, len: u64) -> bool {
        self.session().is_number_multiple(span(start, len))
    }

    /// Start a find session and return the number of matches.
    pub fn start_find(&self, query: String) -> Result<u64, FfiError> {
        let count = self.session().start_find(&query)?;
        Ok(count as u64)
    }

    /// Select the first match at or after `caret`, wrapping around.
    pub fn find_next(&self, caret: u64) -> Option<RangeDto> {
        self.session()
            .find_next(offset(caret))
            .map(RangeDto::from_engine)
    }

    pub fn find_previous(&self) -> Option<RangeDto> {
        self.session().find_previous().map(RangeDto::from_engine)
    }

    /// Replace the selected match; returns the replaced region.
    pub fn replace_current(&self, text: String) -> Option<RangeDto> {
        self.session()
            .replace_current(&text)
            .map(|edit| RangeDto::from_engine(edit.changed))
    }

    /// Replace every match; returns the region the replacements cover.
    pub fn replace_all(&self, text: String) -> Option<RangeDto> {
        self.session()
            .replace_all(&text)
            .map(RangeDto::from_engine)
    }

    pub fn end_find(&self) {
        self.session().end_find();
    }
}

// ============ DTOs ============

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct EditDto {
    /// Start of the inserted text
    pub start: u64,
    /// Length of the inserted text
    pub len: u64,
    /// Buffer version after the edit
    pub version: u64,
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct RangeDto {
    pub start: u64,
    pub len: u64,
}

impl RangeDto {
    fn from_engine(span: Span) -> Self {
        Self {
            start: span.start as u64,
            len: span.len() as u64,
        }
    }
}

/// One stretch of text sharing a style. Colors are `0xRRGGBB`.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct StyledRunDto {
    pub start: u64,
    pub len: u64,
    pub foreground: u32,
    pub background: Option<u32>,
    pub bold: bool,
    pub italic: bool,
    /// Font size in percent of the body size
    pub scale: u16,
    pub strikethrough: bool,
    pub underline: bool,
}

impl StyledRunDto {
    fn from_engine(run: StyledRun) -> Self {
        let rgb = |c: wikitext_editor_engine::Rgb| {
            (u32::from(c.r) << 16) | (u32::from(c.g) << 8) | u32::from(c.b)
        };
        Self {
            start: run.span.start as u64,
            len: run.span.len() as u64,
            foreground: rgb(run.style.foreground),
            background: run.style.background.map(rgb),
            bold: run.style.font.bold,
            italic: run.style.font.italic,
            scale: run.style.font.scale,
            strikethrough: run.style.strikethrough,
            underline: run.style.underline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct SelectionStateDto {
    pub is_bold: bool,
    pub is_italics: bool,
    pub is_horizontal_template: bool,
    pub is_horizontal_reference: bool,
    pub is_bullet_single: bool,
    pub is_bullet_multiple: bool,
    pub is_number_single: bool,
    pub is_number_multiple: bool,
    pub is_heading: bool,
    pub is_subheading1: bool,
    pub is_subheading2: bool,
    pub is_subheading3: bool,
    pub is_subheading4: bool,
    pub is_strikethrough: bool,
    pub is_underline: bool,
    pub is_subscript: bool,
    pub is_superscript: bool,
    pub is_simple_link: bool,
    pub is_link_with_nested_link: bool,
    pub is_comment: bool,
}

impl SelectionStateDto {
    fn from_engine(state: SelectionState) -> Self {
        Self {
            is_bold: state.is_bold,
            is_italics: state.is_italics,
            is_horizontal_template: state.is_horizontal_template,
            is_horizontal_reference: state.is_horizontal_reference,
            is_bullet_single: state.is_bullet_single,
            is_bullet_multiple: state.is_bullet_multiple,
            is_number_single: state.is_number_single,
            is_number_multiple: state.is_number_multiple,
            is_heading: state.is_heading,
            is_subheading1: state.is_subheading1,
            is_subheading2: state.is_subheading2,
            is_subheading3: state.is_subheading3,
            is_subheading4: state.is_subheading4,
            is_strikethrough: state.is_strikethrough,
            is_underline: state.is_underline,
            is_subscript: state.is_subscript,
            is_superscript: state.is_superscript,
            is_simple_link: state.is_simple_link,
            is_link_with_nested_link: state.is_link_with_nested_link,
            is_comment: state.is_comment,
        }
    }
}
