//! Loading indicator.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;

const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// A one-line spinner with a message, advanced by the caller's tick count.
#[derive(Debug, Clone)]
pub struct Spinner<'a> {
    message: &'a str,
    tick: u64,
    theme: Theme,
}

impl<'a> Spinner<'a> {
    pub fn new(message: &'a str, tick: u64) -> Self {
        Self {
            message,
            tick,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Glyph shown for the current tick.
    pub fn glyph(&self) -> &'static str {
        FRAMES[(self.tick % FRAMES.len() as u64) as usize]
    }

    /// Render the spinner centered in `area`.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let y = area.y + area.height / 2;
        let line_area = Rect::new(area.x, y, area.width, area.height.min(1));

        let line = Line::from(vec![
            Span::styled(self.glyph(), self.theme.warning_style()),
            Span::raw(" "),
            Span::raw(self.message),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), line_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_cycles() {
        let glyphs: Vec<&str> = (0..5).map(|t| Spinner::new("", t).glyph()).collect();
        assert_eq!(glyphs, vec!["|", "/", "-", "\\", "|"]);
    }
}
