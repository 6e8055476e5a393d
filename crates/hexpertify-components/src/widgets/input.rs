//! Single-line text editing and labelled form fields.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;

/// An editable line of text with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    value: String,
    cursor: usize,
}

impl TextBuffer {
    /// Create a buffer with the cursor at the end.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the whole value, moving the cursor to the end.
    pub fn set(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    /// Empty the buffer and return what it held.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor. Returns false at the start.
    pub fn delete_char_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    /// Delete the char under the cursor. Returns false at the end.
    pub fn delete_char_at(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Text with a `|` marking the cursor.
    pub fn with_cursor(&self) -> String {
        let before: String = self.value.chars().take(self.cursor).collect();
        let after: String = self.value.chars().skip(self.cursor).collect();
        format!("{}|{}", before, after)
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// A labelled input field with an optional error line below it.
#[derive(Debug, Clone)]
pub struct InputField<'a> {
    /// Label shown in the border.
    label: &'a str,
    /// Current value.
    buffer: &'a TextBuffer,
    /// Whether the field is focused.
    focused: bool,
    /// Whether the field is read-only.
    disabled: bool,
    /// Placeholder text.
    placeholder: Option<&'a str>,
    /// Validation message.
    error: Option<&'a str>,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> InputField<'a> {
    /// Create a new input field.
    pub fn new(label: &'a str, buffer: &'a TextBuffer) -> Self {
        Self {
            label,
            buffer,
            focused: false,
            disabled: false,
            placeholder: None,
            error: None,
            theme: Theme::default(),
        }
    }

    /// Set whether the field is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether the field is read-only.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set placeholder text.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set the validation message. Empty strings are treated as none.
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error.filter(|e| !e.is_empty());
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Rows needed to draw the field.
    pub fn height(&self) -> u16 {
        if self.error.is_some() {
            4
        } else {
            3
        }
    }

    /// Render the field and return the display text.
    pub fn render_text(&self) -> String {
        if self.buffer.is_empty() && !self.focused {
            return self.placeholder.unwrap_or_default().to_string();
        }

        if self.focused && !self.disabled {
            self.buffer.with_cursor()
        } else {
            self.buffer.value().to_string()
        }
    }

    /// Get the style for the field text.
    pub fn style(&self) -> Style {
        if self.disabled {
            self.theme.muted_style()
        } else if self.error.is_some() {
            self.theme.error_style()
        } else if self.focused {
            Style::default().fg(Color::White)
        } else if self.buffer.is_empty() && self.placeholder.is_some() {
            self.theme.muted_style()
        } else {
            Style::default()
        }
    }

    fn border_style(&self) -> Style {
        if self.error.is_some() {
            self.theme.error_style()
        } else if self.focused && !self.disabled {
            self.theme.focused_border()
        } else {
            self.theme.unfocused_border()
        }
    }

    /// Render the field.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let box_area = Rect::new(area.x, area.y, area.width, area.height.min(3));

        let paragraph = Paragraph::new(Line::from(Span::styled(self.render_text(), self.style())))
            .block(
                Block::default()
                    .title(format!(" {} ", self.label))
                    .borders(Borders::ALL)
                    .border_style(self.border_style()),
            );
        frame.render_widget(paragraph, box_area);

        if let Some(error) = self.error {
            if area.height > 3 {
                let error_area = Rect::new(area.x + 1, area.y + 3, area.width.saturating_sub(1), 1);
                frame.render_widget(
                    Paragraph::new(Span::styled(error, self.theme.error_style())),
                    error_area,
                );
            }
        }
    }
}
