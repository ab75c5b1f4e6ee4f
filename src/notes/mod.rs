use crate::TemplateKind;
use crate::clipboard::{Clipboard, ClipboardError};
use crate::templates;
use unicode_width::UnicodeWidthStr;

/// The shared review notes buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewNotes {
    text: String,
}

impl ReviewNotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole buffer with the editor's current value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append a template snippet using its group's format.
    pub fn append_template(&mut self, kind: TemplateKind, snippet: &str) {
        templates::append_snippet(&mut self.text, kind, snippet);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Hand the buffer verbatim to the clipboard.
    ///
    /// The outcome belongs to the caller; the buffer is never changed by it.
    pub fn copy_to_clipboard(&self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        clipboard.write_text(&self.text)
    }
}

/// Cursor over the notes text, as a byte offset on a char boundary.
///
/// Editing methods take the current text and return the full new value,
/// which the caller writes back with [`ReviewNotes::set_text`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotesCursor {
    pos: usize,
}

impl NotesCursor {
    #[cfg(test)]
    fn position(&self) -> usize {
        self.pos
    }

    /// Keep the cursor inside `text` and on a char boundary.
    pub fn clamp(&mut self, text: &str) {
        if self.pos > text.len() {
            self.pos = text.len();
        }
        while !text.is_char_boundary(self.pos) {
            self.pos -= 1;
        }
    }

    pub fn move_to_end(&mut self, text: &str) {
        self.pos = text.len();
    }

    pub fn insert(&mut self, text: &str, ch: char) -> String {
        self.clamp(text);
        let mut value = String::with_capacity(text.len() + ch.len_utf8());
        value.push_str(&text[..self.pos]);
        value.push(ch);
        value.push_str(&text[self.pos..]);
        self.pos += ch.len_utf8();
        value
    }

    /// Delete the char before the cursor. Returns `None` at the start of the text.
    pub fn backspace(&mut self, text: &str) -> Option<String> {
        self.clamp(text);
        let (start, _) = text[..self.pos].char_indices().next_back()?;
        let mut value = String::with_capacity(text.len());
        value.push_str(&text[..start]);
        value.push_str(&text[self.pos..]);
        self.pos = start;
        Some(value)
    }

    /// Delete the char under the cursor. Returns `None` at the end of the text.
    pub fn delete(&mut self, text: &str) -> Option<String> {
        self.clamp(text);
        let ch = text[self.pos..].chars().next()?;
        let mut value = String::with_capacity(text.len());
        value.push_str(&text[..self.pos]);
        value.push_str(&text[self.pos + ch.len_utf8()..]);
        Some(value)
    }

    pub fn left(&mut self, text: &str) {
        self.clamp(text);
        if let Some((start, _)) = text[..self.pos].char_indices().next_back() {
            self.pos = start;
        }
    }

    pub fn right(&mut self, text: &str) {
        self.clamp(text);
        if let Some(ch) = text[self.pos..].chars().next() {
            self.pos += ch.len_utf8();
        }
    }

    pub fn home(&mut self, text: &str) {
        self.clamp(text);
        self.pos = line_start(text, self.pos);
    }

    pub fn end(&mut self, text: &str) {
        self.clamp(text);
        self.pos = line_end(text, self.pos);
    }

    pub fn up(&mut self, text: &str) {
        self.clamp(text);
        let start = line_start(text, self.pos);
        if start == 0 {
            self.pos = 0;
            return;
        }
        let column = text[start..self.pos].chars().count();
        let prev_start = line_start(text, start - 1);
        self.pos = offset_at_column(text, prev_start, column);
    }

    pub fn down(&mut self, text: &str) {
        self.clamp(text);
        let start = line_start(text, self.pos);
        let end = line_end(text, self.pos);
        if end == text.len() {
            self.pos = end;
            return;
        }
        let column = text[start..self.pos].chars().count();
        self.pos = offset_at_column(text, end + 1, column);
    }

    /// Zero-based (line, column) of the cursor, column counted in terminal cells.
    pub fn line_col(&self, text: &str) -> (usize, usize) {
        let pos = self.pos.min(text.len());
        let before = &text[..pos];
        let line = before.matches('\n').count();
        let column = before[line_start(text, pos)..].width();
        (line, column)
    }
}

fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map(|i| pos + i).unwrap_or(text.len())
}

/// Byte offset of `column` chars into the line starting at `start`, clamped to the line end.
fn offset_at_column(text: &str, start: usize, column: usize) -> usize {
    let end = line_end(text, start);
    text[start..end]
        .char_indices()
        .nth(column)
        .map(|(i, _)| start + i)
        .unwrap_or(end)
}
