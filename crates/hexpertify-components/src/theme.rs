//! Theme and style definitions.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for Hexpertify TUI components.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent color (focused borders, active tabs)
    pub accent: Color,
    /// Success color (saved, loaded)
    pub success: Color,
    /// Warning color (pending requests)
    pub warning: Color,
    /// Error color (validation messages, invalid fields)
    pub error: Color,
    /// Muted color (placeholders, disabled fields)
    pub muted: Color,
    /// Background of the row under the pointer
    pub hover: Color,
    /// Background of a committed chip
    pub chip: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            hover: Color::Rgb(55, 65, 81),
            chip: Color::Rgb(229, 231, 235),
        }
    }
}

impl Theme {
    /// Style for focused/active borders.
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for unfocused borders.
    pub fn unfocused_border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for warning text.
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for muted/secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for bold text.
    pub fn bold(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for table header cells.
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the hovered table row.
    pub fn hover_style(&self) -> Style {
        Style::default().bg(self.hover)
    }

    /// Style for a chip label.
    pub fn chip_style(&self) -> Style {
        Style::default().fg(Color::Black).bg(self.chip)
    }

    /// Style for the chip picked for removal.
    pub fn chip_selected_style(&self) -> Style {
        self.chip_style().add_modifier(Modifier::REVERSED)
    }

    /// Style for the remove mark inside a chip.
    pub fn chip_remove_style(&self) -> Style {
        Style::default().fg(self.error).bg(self.chip)
    }
}
