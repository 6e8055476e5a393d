//! Footer widget for TUI applications.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;

/// Footer widget with a status message and key help.
#[derive(Debug, Clone)]
pub struct Footer<'a> {
    /// Status message.
    status: &'a str,
    /// Whether the status reports a failure.
    is_error: bool,
    /// Key help text.
    help: &'a str,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> Footer<'a> {
    /// Create a new footer with help text.
    pub fn new(help: &'a str) -> Self {
        Self {
            status: "Ready",
            is_error: false,
            help,
            theme: Theme::default(),
        }
    }

    /// Set the status message.
    pub fn status(mut self, status: &'a str, is_error: bool) -> Self {
        self.status = status;
        self.is_error = is_error;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the footer.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let status_style = if self.is_error {
            self.theme.error_style()
        } else {
            self.theme.success_style()
        };

        let footer = Line::from(vec![
            Span::styled(self.status, status_style),
            Span::raw(" | "),
            Span::styled(self.help, self.theme.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(footer), area);
    }
}
