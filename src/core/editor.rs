//! Input pane editing on top of `tui_textarea`

use tui_textarea::{CursorMove, TextArea};
use super::events::AppEvent;

/// One editable input pane.
///
/// Editing, cursor movement and the horizontal viewport are handled by
/// `TextArea`; this type owns the text conventions (LF line breaks, text
/// joined with `\n`) and reports whether an event really changed the text.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    textarea: TextArea<'static>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents and park the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        let lines: Vec<String> = normalize_newlines(text)
            .split('\n')
            .map(str::to_string)
            .collect();
        self.textarea = TextArea::new(lines);
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.textarea.lines(), [line] if line.is_empty())
    }

    /// Cursor as (row, char column)
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    /// Apply an editing or cursor event, returning whether the text changed
    pub fn apply(&mut self, event: &AppEvent) -> bool {
        let before = self.textarea.lines().to_vec();

        match event {
            AppEvent::Insert(ch) => self.textarea.insert_char(*ch),
            AppEvent::Paste(text) => self.paste(text),
            AppEvent::Newline => self.textarea.insert_newline(),
            AppEvent::Backspace => {
                self.textarea.delete_char();
            }
            AppEvent::Delete => {
                self.textarea.delete_next_char();
            }
            AppEvent::ClearPane => self.set_text(""),
            AppEvent::CursorLeft => self.textarea.move_cursor(CursorMove::Back),
            AppEvent::CursorRight => self.textarea.move_cursor(CursorMove::Forward),
            AppEvent::CursorUp => self.textarea.move_cursor(CursorMove::Up),
            AppEvent::CursorDown => self.textarea.move_cursor(CursorMove::Down),
            AppEvent::CursorHome => self.textarea.move_cursor(CursorMove::Head),
            AppEvent::CursorEnd => self.textarea.move_cursor(CursorMove::End),
            _ => return false,
        }

        self.textarea.lines() != before.as_slice()
    }

    fn paste(&mut self, text: &str) {
        let text = normalize_newlines(text);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.textarea.insert_newline();
            }
            if !line.is_empty() {
                self.textarea.insert_str(line);
            }
        }
    }
}

/// Convert CRLF and lone CR line breaks to LF
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
