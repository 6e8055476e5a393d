//! Modal dialogs.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;
use crate::widgets::input::TextBuffer;

/// Create a centered rectangle within the given area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// A text input dialog drawn over the current view.
#[derive(Debug, Clone)]
pub struct InputDialog<'a> {
    /// Dialog title.
    title: &'a str,
    /// Prompt message.
    prompt: &'a str,
    /// Current input.
    input: &'a TextBuffer,
    /// Validation or request error.
    error: Option<&'a str>,
    /// Label of the submit action.
    submit_label: &'a str,
    /// Whether a submit is in flight.
    busy: bool,
    /// Width of the dialog.
    width: u16,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> InputDialog<'a> {
    /// Create a new input dialog.
    pub fn new(title: &'a str, prompt: &'a str, input: &'a TextBuffer) -> Self {
        Self {
            title,
            prompt,
            input,
            error: None,
            submit_label: "Submit",
            busy: false,
            width: 60,
            theme: Theme::default(),
        }
    }

    /// Show an error line under the input.
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error.filter(|e| !e.is_empty());
        self
    }

    /// Set the label of the submit action.
    pub fn submit_label(mut self, label: &'a str) -> Self {
        self.submit_label = label;
        self
    }

    /// Mark a submit as in flight; the submit hint is hidden.
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    /// Set the dialog width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the dialog.
    pub fn render(self, frame: &mut Frame) {
        let area = centered_rect(self.width, 8, frame.area());

        frame.render_widget(Clear, area);

        let hint = if self.busy {
            "  Working...".to_string()
        } else {
            format!("  [Enter] {}  [Esc] No, Close", self.submit_label)
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", self.prompt),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", self.input.with_cursor()),
                Style::default().fg(Color::White),
            )),
            match self.error {
                Some(error) => Line::from(Span::styled(
                    format!("  {}", error),
                    self.theme.error_style(),
                )),
                None => Line::from(""),
            },
            Line::from(Span::styled(hint, self.theme.muted_style())),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.focused_border())
                .title(format!(" {} ", self.title)),
        );

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::testing::{contains, draw};

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 8, area), Rect::new(20, 16, 60, 8));
        assert_eq!(centered_rect(200, 8, area), Rect::new(0, 16, 100, 8));
    }

    #[test]
    fn test_dialog_shows_input_and_error() {
        let input = TextBuffer::new("banner.png");
        let lines = draw(70, 12, |frame| {
            InputDialog::new("Upload banner", "Image path", &input)
                .submit_label("Upload")
                .error(Some("Image is required"))
                .render(frame);
        });
        assert!(contains(&lines, "Upload banner"));
        assert!(contains(&lines, "banner.png|"));
        assert!(contains(&lines, "Image is required"));
        assert!(contains(&lines, "[Enter] Upload"));
    }

    #[test]
    fn test_busy_dialog_hides_submit() {
        let input = TextBuffer::default();
        let lines = draw(70, 12, |frame| {
            InputDialog::new("Upload banner", "Image path", &input)
                .busy(true)
                .render(frame);
        });
        assert!(contains(&lines, "Working..."));
        assert!(!contains(&lines, "[Enter]"));
    }
}
