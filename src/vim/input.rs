use zeroize::Zeroize;

/// Single-line text field with a character cursor.
///
/// Applicant details are personal data, so the buffer wipes its contents
/// whenever they are replaced and when it is dropped.
#[derive(Default, Clone)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl std::fmt::Debug for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputBuffer")
            .field("len", &self.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(value: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set(value);
        buffer
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content with surrounding whitespace removed, as validators see it
    pub fn trimmed(&self) -> &str {
        self.content.trim()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn display_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.content.is_empty() {
            placeholder
        } else {
            &self.content
        }
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.cursor_byte_position();
        self.content.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_at_cursor();
            true
        } else {
            false
        }
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor < self.len() {
            self.remove_at_cursor();
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.content.zeroize();
        self.content.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, value: &str) {
        self.content.zeroize();
        self.content = value.to_string();
        self.cursor = self.len();
    }

    fn remove_at_cursor(&mut self) {
        let byte_pos = self.cursor_byte_position();
        let next_byte_pos = self.content[byte_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| byte_pos + i)
            .unwrap_or(self.content.len());
        self.content.drain(byte_pos..next_byte_pos);
    }

    fn cursor_byte_position(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

impl Drop for InputBuffer {
    fn drop(&mut self) {
        self.content.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_at_cursor_with_multibyte_chars() {
        let mut buffer = InputBuffer::with_content("Zoë");
        assert_eq!(buffer.cursor(), 3);
        buffer.move_left();
        buffer.insert('x');
        assert_eq!(buffer.content(), "Zoxë");
        assert!(buffer.delete_forward());
        assert_eq!(buffer.content(), "Zox");
        assert!(buffer.delete_back());
        assert_eq!(buffer.content(), "Zo");
        buffer.move_start();
        assert!(!buffer.delete_back());
    }

    #[test]
    fn placeholder_only_when_empty() {
        let mut buffer = InputBuffer::new();
        assert_eq!(buffer.display_or("(empty)"), "(empty)");
        buffer.set("Jane");
        assert_eq!(buffer.display_or("(empty)"), "Jane");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.cursor(), 0);
    }
}
