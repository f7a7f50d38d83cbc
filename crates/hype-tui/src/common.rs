//! Small shared UI primitives: text field, spinner, layout helpers.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Spinner animation frames, advanced once per tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Returns the spinner glyph for a frame counter.
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Single-line text input with a char-indexed cursor.
#[derive(Debug, Default, Clone)]
pub struct TextField {
    value: String,
    /// Cursor position in chars (0..=len).
    cursor: usize,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        let byte_index = self.byte_index();
        self.value.insert(byte_index, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_index = self.byte_index();
        self.value.remove(byte_index);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Display-width offset of the cursor, for terminal cursor placement.
    pub fn cursor_offset(&self) -> u16 {
        let prefix: String = self.value.chars().take(self.cursor).collect();
        prefix.width() as u16
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(index, _)| index)
    }
}

/// Centers a fixed-size box inside an area, clamped to its bounds.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_insert_and_backspace() {
        let mut field = TextField::default();
        for c in "Falcons".chars() {
            field.insert(c);
        }
        assert_eq!(field.value(), "Falcons");

        field.backspace();
        assert_eq!(field.value(), "Falcon");
    }

    #[test]
    fn test_text_field_mid_string_editing() {
        let mut field = TextField::default();
        for c in "Fns".chars() {
            field.insert(c);
        }
        field.move_left();
        field.move_left();
        field.insert('a');
        assert_eq!(field.value(), "Fans");

        field.backspace();
        assert_eq!(field.value(), "Fns");
    }

    #[test]
    fn test_text_field_handles_multibyte_chars() {
        let mut field = TextField::default();
        field.insert('é');
        field.insert('t');
        field.move_left();
        field.move_left();
        field.move_right();
        field.backspace();
        assert_eq!(field.value(), "t");
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(area, 40, 40);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 10);

        let inner = centered_rect(area, 10, 4);
        assert_eq!(inner.x, 5);
        assert_eq!(inner.y, 3);
    }
}
