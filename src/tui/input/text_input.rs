//! Single-line text editor backing the focused form field.

/// Editing state for one text field.
///
/// The cursor is a byte offset that always sits on a `char` boundary, so
/// accented input (common in pt-BR names) moves and deletes whole
/// characters.
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// An empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts editing existing content with the cursor at the end.
    pub fn with_content(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Current content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Content before the cursor; the renderer measures this to place the
    /// visible cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.cursor]
    }

    /// Inserts a character at the cursor.
    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    /// Removes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Byte offset of the character preceding the cursor.
    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_multibyte_content_at_char_boundaries() {
        let mut input = TextInput::with_content("João");
        input.backspace();
        assert_eq!(input.text(), "Joã");
        input.backspace();
        assert_eq!(input.text(), "Jo");
        input.insert('ã');
        input.insert('o');
        assert_eq!(input.text(), "João");
    }

    #[test]
    fn insert_and_delete_in_the_middle() {
        let mut input = TextInput::with_content("ab");
        input.move_home();
        input.move_right();
        input.insert('x');
        assert_eq!(input.text(), "axb");
        assert_eq!(input.before_cursor(), "ax");
        input.delete();
        assert_eq!(input.text(), "ax");
    }

    #[test]
    fn movement_clamps_at_both_ends() {
        let mut input = TextInput::with_content("é");
        input.move_right();
        assert_eq!(input.before_cursor(), "é");
        input.move_left();
        input.move_left();
        assert_eq!(input.before_cursor(), "");
    }
}
