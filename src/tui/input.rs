use crate::todo::models::TodoList;
use tracing::debug;

/// Single-line text field that turns its content into a new todo on commit.
#[derive(Debug, Default)]
pub struct InputBinding {
    pub buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    pub cursor_position: usize,
}

impl InputBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forwards the buffer to `todo_list` and clears it. An empty buffer is
    /// ignored. Whitespace is not trimmed.
    pub fn commit(&mut self, todo_list: &mut TodoList) -> bool {
        if self.buffer.is_empty() {
            debug!("ignoring commit of empty input");
            return false;
        }

        todo_list.create_todo(std::mem::take(&mut self.buffer));
        self.cursor_position = 0;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(previous) = self.previous_boundary() {
            self.buffer.remove(previous);
            self.cursor_position = previous;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_position < self.buffer.len() {
            self.buffer.remove(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(previous) = self.previous_boundary() {
            self.cursor_position = previous;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(ch) = self.buffer[self.cursor_position..].chars().next() {
            self.cursor_position += ch.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.buffer.len();
    }

    /// Deletes back to the start of the previous word, like Ctrl+W in a shell.
    pub fn delete_word_backward(&mut self) {
        let before = &self.buffer[..self.cursor_position];
        let word_end = before.trim_end().len();
        let word_start = before[..word_end]
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_whitespace())
            .map(|(i, ch)| i + ch.len_utf8())
            .unwrap_or(0);

        self.buffer.replace_range(word_start..self.cursor_position, "");
        self.cursor_position = word_start;
    }

    /// Splits the buffer at the cursor for rendering.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.cursor_position)
    }

    fn previous_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor_position]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}
