// In-place cell editing buffer. Key events arrive from the grid's
// on_key_down handler; this module only owns the text and the cursor.

use unicode_segmentation::UnicodeSegmentation;

/// What the grid should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Changed,
    /// Enter: store the text and move down
    Commit,
    /// Tab: store the text and move right
    CommitRight,
    /// Escape: drop the edit
    Cancel,
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellEditor {
    text: String,
    /// Byte offset, always on a grapheme boundary
    cursor: usize,
}

impl CellEditor {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text split at the cursor, for rendering a caret between the halves.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }

    pub fn insert(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub fn backspace(&mut self) -> bool {
        let Some(start) = self.previous_boundary() else {
            return false;
        };
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    pub fn delete(&mut self) -> bool {
        let Some(end) = self.next_boundary() else {
            return false;
        };
        self.text.replace_range(self.cursor..end, "");
        true
    }

    pub fn move_left(&mut self) {
        if let Some(offset) = self.previous_boundary() {
            self.cursor = offset;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(offset) = self.next_boundary() {
            self.cursor = offset;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    fn previous_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }

    /// Apply a key press. `key` is gpui's key name, `key_char` the text it types.
    pub fn handle_key(&mut self, key: &str, key_char: Option<&str>, has_modifier: bool) -> EditOutcome {
        match key {
            "enter" => return EditOutcome::Commit,
            "tab" => return EditOutcome::CommitRight,
            "escape" => return EditOutcome::Cancel,
            "backspace" => {
                return if self.backspace() { EditOutcome::Changed } else { EditOutcome::Ignored };
            }
            "delete" => {
                return if self.delete() { EditOutcome::Changed } else { EditOutcome::Ignored };
            }
            "left" => {
                self.move_left();
                return EditOutcome::Changed;
            }
            "right" => {
                self.move_right();
                return EditOutcome::Changed;
            }
            "home" => {
                self.home();
                return EditOutcome::Changed;
            }
            "end" => {
                self.end();
                return EditOutcome::Changed;
            }
            _ => {}
        }

        match key_char {
            Some(chars) if !has_modifier && !chars.is_empty() => {
                self.insert(chars);
                EditOutcome::Changed
            }
            _ => EditOutcome::Ignored,
        }
    }
}
