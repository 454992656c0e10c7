use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wikitext_editor_engine::{DataStore, EditorSession, SelectionState, Span};

use crate::text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

pub struct App {
    pub session: EditorSession,
    /// Byte offset of the caret.
    pub caret: usize,
    pub title: String,
    pub status: String,
    store: Option<DataStore>,
}

impl App {
    pub fn new(text: &str, title: String, store: Option<DataStore>) -> Self {
        Self {
            session: EditorSession::new(text),
            caret: 0,
            title,
            status: String::new(),
            store,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let text = self.session.text();
        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('s') if ctrl => self.save_draft(),
            KeyCode::Char('h') if ctrl => self.toggle_highlighting(),
            KeyCode::Char('f') if ctrl => self.find_word_at_caret(),
            KeyCode::Char('n') if ctrl => self.find_next(),
            KeyCode::Char('p') if ctrl => self.find_previous(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            KeyCode::Enter => self.insert("\n"),
            KeyCode::Backspace => {
                let start = text::prev_boundary(&text, self.caret);
                self.delete(Span::new(start, self.caret));
            }
            KeyCode::Delete => {
                let end = text::next_boundary(&text, self.caret);
                self.delete(Span::new(self.caret, end));
            }
            KeyCode::Left => self.caret = text::prev_boundary(&text, self.caret),
            KeyCode::Right => self.caret = text::next_boundary(&text, self.caret),
            KeyCode::Up => self.caret = text::line_up(&text, self.caret),
            KeyCode::Down => self.caret = text::line_down(&text, self.caret),
            KeyCode::Home => self.caret = text::line_start(&text, self.caret),
            KeyCode::End => self.caret = text::line_end(&text, self.caret),
            _ => {}
        }
        Action::Continue
    }

    pub fn selection_state(&self) -> SelectionState {
        self.session.selection_state(Span::at(self.caret, 0))
    }

    fn insert(&mut self, s: &str) {
        let edit = self.session.replace(Span::at(self.caret, 0), s);
        self.caret = edit.changed.end;
    }

    fn delete(&mut self, span: Span) {
        if span.is_empty() {
            return;
        }
        let edit = self.session.replace(span, "");
        self.caret = edit.changed.start;
    }

    fn save_draft(&mut self) {
        let text = self.session.text();
        let Some(store) = self.store.as_mut() else {
            self.status = "No draft store available".to_string();
            return;
        };
        match store.save_draft(&self.title, &text) {
            Ok(id) => {
                log::info!("saved draft {:?} as {id}", self.title);
                self.status = format!("Saved draft \"{}\"", self.title);
            }
            Err(e) => {
                log::error!("saving draft {:?} failed: {e}", self.title);
                self.status = format!("Save failed: {e}");
            }
        }
    }

    fn toggle_highlighting(&mut self) {
        let enabled = !self.session.syntax_highlighting();
        self.session.set_syntax_highlighting(enabled);
        self.status = format!("Syntax highlighting {}", if enabled { "on" } else { "off" });
    }

    fn find_word_at_caret(&mut self) {
        let text = self.session.text();
        let Some(word) = text::word_at(&text, self.caret) else {
            self.status = "No word under the caret".to_string();
            return;
        };
        let query = &text[word.start..word.end];
        match self.session.start_find(query) {
            Ok(count) => {
                self.status = format!("{count} matches for \"{query}\"");
                self.find_next();
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn find_next(&mut self) {
        let found = self.session.find_next(self.caret);
        self.show_match(found);
    }

    fn find_previous(&mut self) {
        let found = self.session.find_previous();
        self.show_match(found);
    }

    fn show_match(&mut self, found: Option<Span>) {
        let Some(span) = found else {
            return;
        };
        self.caret = span.start;
        if let Some(find) = self.session.find()
            && let Some((i, _)) = find.current_match()
        {
            self.status = format!(
                "Match {} of {} for \"{}\"",
                i + 1,
                find.match_count(),
                find.query()
            );
        }
    }
}
