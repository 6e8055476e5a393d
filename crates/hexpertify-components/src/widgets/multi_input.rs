//! Chip-based multi-value input.
//!
//! [`MultiInputState`] holds the committed chips and the pending text. Every
//! operation reports back through [`InputOutcome`]; a parent keeps its own
//! copy of the list in sync by applying each [`InputOutcome::Changed`] it
//! receives, and re-seeds the widget with [`MultiInputState::reset`].
//!
//! | Operation | Effect | Outcome |
//! |---|---|---|
//! | type | buffer edited | `Edited` |
//! | commit new value | value appended, buffer cleared | `Changed(list)` |
//! | commit empty or duplicate | nothing | `Ignored` |
//! | remove existing chip | chip removed, order kept | `Changed(list)` |
//! | clear | chips and buffer emptied | `Changed([])` |
//!
//! While disabled the control takes no keys and rejects typing and commits.
//! [`MultiInputState::remove`] and [`MultiInputState::clear`] stay callable
//! by the owner.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use crate::utils::truncate;
use crate::widgets::input::TextBuffer;

/// Placeholder shown in an empty entry field.
pub const DEFAULT_PLACEHOLDER: &str = "Type...";

/// Mark drawn after each chip label.
const REMOVE_MARK: &str = " x";

/// Result of an input operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// The committed list changed; carries the full new list.
    Changed(Vec<String>),
    /// Only the pending text or the chip selection changed.
    Edited,
    /// Nothing happened.
    Ignored,
}

impl InputOutcome {
    /// The new list, if the chips changed.
    pub fn changed(&self) -> Option<&[String]> {
        match self {
            InputOutcome::Changed(list) => Some(list),
            _ => None,
        }
    }
}

/// Committed chips plus the pending entry text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiInputState {
    chips: Vec<String>,
    buffer: TextBuffer,
    /// Chip picked with the arrow keys, the target of Backspace/Delete.
    selected: Option<usize>,
    disabled: bool,
}

impl MultiInputState {
    /// Seed the chips from the parent's value.
    pub fn new<I, S>(value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            chips: value.into_iter().map(Into::into).collect(),
            buffer: TextBuffer::default(),
            selected: None,
            disabled: false,
        }
    }

    /// Re-seed the chips from the parent's value, keeping the pending text.
    pub fn reset<I, S>(&mut self, value: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chips = value.into_iter().map(Into::into).collect();
        self.clamp_selection();
    }

    pub fn chips(&self) -> &[String] {
        &self.chips
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn pending(&self) -> &str {
        self.buffer.value()
    }

    /// Index of the selected chip.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.selected = None;
        }
    }

    /// Type a character at the cursor.
    pub fn insert_char(&mut self, c: char) -> InputOutcome {
        if self.disabled {
            return InputOutcome::Ignored;
        }
        self.selected = None;
        self.buffer.insert_char(c);
        InputOutcome::Edited
    }

    /// Replace the pending text.
    pub fn set_pending(&mut self, text: impl Into<String>) -> InputOutcome {
        if self.disabled {
            return InputOutcome::Ignored;
        }
        self.selected = None;
        self.buffer.set(text);
        InputOutcome::Edited
    }

    /// Move the pending text into the chips.
    ///
    /// Empty text and values already present are ignored; comparison is
    /// exact.
    pub fn commit(&mut self) -> InputOutcome {
        if self.disabled {
            return InputOutcome::Ignored;
        }

        let pending = self.buffer.value();
        if pending.is_empty() || self.chips.iter().any(|chip| chip == pending) {
            return InputOutcome::Ignored;
        }

        let value = self.buffer.take();
        self.chips.push(value);
        self.selected = None;
        InputOutcome::Changed(self.chips.clone())
    }

    /// Remove a chip by value.
    pub fn remove(&mut self, value: &str) -> InputOutcome {
        match self.chips.iter().position(|chip| chip == value) {
            Some(index) => self.remove_at(index),
            None => InputOutcome::Ignored,
        }
    }

    /// Remove the chip at `index`.
    pub fn remove_at(&mut self, index: usize) -> InputOutcome {
        if index >= self.chips.len() {
            return InputOutcome::Ignored;
        }
        self.chips.remove(index);
        self.clamp_selection();
        InputOutcome::Changed(self.chips.clone())
    }

    /// Empty both the chips and the pending text.
    pub fn clear(&mut self) -> InputOutcome {
        self.chips.clear();
        self.buffer.take();
        self.selected = None;
        InputOutcome::Changed(Vec::new())
    }

    fn clamp_selection(&mut self) {
        self.selected = match (self.selected, self.chips.len()) {
            (_, 0) | (None, _) => None,
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }

    /// Select the chip left of the current one, starting from the last.
    fn select_prev(&mut self) -> InputOutcome {
        let next = match self.selected {
            None => self.chips.len().checked_sub(1),
            Some(i) => Some(i.saturating_sub(1)),
        };
        if next == self.selected {
            return InputOutcome::Ignored;
        }
        self.selected = next;
        InputOutcome::Edited
    }

    /// Select the chip to the right; past the last one returns to the text.
    fn select_next(&mut self) -> InputOutcome {
        let Some(i) = self.selected else {
            return InputOutcome::Ignored;
        };
        self.selected = (i + 1 < self.chips.len()).then_some(i + 1);
        InputOutcome::Edited
    }

    /// Apply a key press.
    ///
    /// Enter commits and Ctrl+X clears. With no pending text, Left/Right
    /// pick a chip and Backspace/Delete remove it; Backspace with nothing
    /// picked removes the last chip. Other editing keys act on the pending
    /// text. A disabled input takes no keys at all.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        if self.disabled || key.kind == KeyEventKind::Release {
            return InputOutcome::Ignored;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('x') => self.clear(),
                _ => InputOutcome::Ignored,
            };
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return InputOutcome::Ignored;
        }

        if self.buffer.is_empty() {
            match (key.code, self.selected) {
                (KeyCode::Left, _) => return self.select_prev(),
                (KeyCode::Right, Some(_)) => return self.select_next(),
                (KeyCode::Backspace | KeyCode::Delete, Some(i)) => return self.remove_at(i),
                (KeyCode::Backspace, None) => {
                    return match self.chips.len() {
                        0 => InputOutcome::Ignored,
                        n => self.remove_at(n - 1),
                    }
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Enter => self.commit(),
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => edited(self.buffer.delete_char_before()),
            KeyCode::Delete => edited(self.buffer.delete_char_at()),
            KeyCode::Left => {
                self.buffer.cursor_left();
                InputOutcome::Edited
            }
            KeyCode::Right => {
                self.buffer.cursor_right();
                InputOutcome::Edited
            }
            KeyCode::Home => {
                self.buffer.cursor_home();
                InputOutcome::Edited
            }
            KeyCode::End => {
                self.buffer.cursor_end();
                InputOutcome::Edited
            }
            _ => InputOutcome::Ignored,
        }
    }
}

fn edited(changed: bool) -> InputOutcome {
    if changed {
        InputOutcome::Edited
    } else {
        InputOutcome::Ignored
    }
}

/// Chip width on screen: " label x ".
fn chip_width(label: &str) -> usize {
    label.width() + REMOVE_MARK.len() + 2
}

/// Group chips into lines no wider than `width` columns.
///
/// Each entry is the chip's index and its label, shortened when a single
/// chip would not fit on a line.
fn chip_lines(chips: &[String], width: u16) -> Vec<Vec<(usize, String)>> {
    let width = usize::from(width);
    let max_label = width.saturating_sub(chip_width(""));
    let mut lines: Vec<Vec<(usize, String)>> = Vec::new();
    let mut current: Vec<(usize, String)> = Vec::new();
    let mut used = 0;

    for (index, chip) in chips.iter().enumerate() {
        let label = truncate(chip, max_label);
        let needed = chip_width(&label) + usize::from(!current.is_empty());

        if used + needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }

        used += chip_width(&label) + usize::from(!current.is_empty());
        current.push((index, label));
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Renders a [`MultiInputState`] as a labelled box of chips above an entry
/// line, with an optional error message underneath.
#[derive(Debug, Clone)]
pub struct MultiInput<'a> {
    state: &'a MultiInputState,
    label: &'a str,
    placeholder: &'a str,
    error: Option<&'a str>,
    focused: bool,
    theme: Theme,
}

impl<'a> MultiInput<'a> {
    pub fn new(state: &'a MultiInputState) -> Self {
        Self {
            state,
            label: "",
            placeholder: DEFAULT_PLACEHOLDER,
            error: None,
            focused: false,
            theme: Theme::default(),
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the error message. Empty strings are treated as none.
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error.filter(|e| !e.is_empty());
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Whether the control is flagged invalid.
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// Rows needed to draw the control at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        let chips = chip_lines(self.state.chips(), width.saturating_sub(2)).len();
        let chips = u16::try_from(chips).unwrap_or(u16::MAX);
        let error = u16::from(self.error.is_some());
        chips.saturating_add(3 + error)
    }

    fn border_style(&self) -> Style {
        if self.error.is_some() {
            self.theme.error_style()
        } else if self.state.is_disabled() {
            self.theme.unfocused_border()
        } else if self.focused {
            self.theme.focused_border()
        } else {
            self.theme.unfocused_border()
        }
    }

    fn entry_line(&self) -> Line<'a> {
        let buffer = self.state.buffer();

        if buffer.is_empty() && !(self.focused && !self.state.is_disabled()) {
            return Line::from(Span::styled(self.placeholder, self.theme.muted_style()));
        }

        let text = if self.focused && !self.state.is_disabled() {
            buffer.with_cursor()
        } else {
            buffer.value().to_string()
        };
        let text_style = if self.error.is_some() {
            self.theme.error_style()
        } else {
            Style::default()
        };

        let mut spans = vec![Span::styled(text, text_style)];
        // Confirm and clear controls only show once something is typed.
        if !buffer.is_empty() {
            spans.push(Span::styled(
                "  [Enter] add  [^X] clear",
                self.theme.muted_style(),
            ));
        }
        Line::from(spans)
    }

    /// Render the control.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let error_rows = u16::from(self.error.is_some());
        let box_area = Rect::new(
            area.x,
            area.y,
            area.width,
            area.height.saturating_sub(error_rows),
        );

        let mut lines: Vec<Line> = chip_lines(self.state.chips(), area.width.saturating_sub(2))
            .into_iter()
            .map(|chips| {
                let mut spans = Vec::new();
                for (i, (index, label)) in chips.into_iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    let style = if self.focused && self.state.selected() == Some(index) {
                        self.theme.chip_selected_style()
                    } else {
                        self.theme.chip_style()
                    };
                    spans.push(Span::styled(format!(" {}", label), style));
                    spans.push(Span::styled(
                        format!("{} ", REMOVE_MARK),
                        self.theme.chip_remove_style(),
                    ));
                }
                Line::from(spans)
            })
            .collect();
        lines.push(self.entry_line());

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", self.label))
                .borders(Borders::ALL)
                .border_style(self.border_style()),
        );
        frame.render_widget(paragraph, box_area);

        if let Some(error) = self.error {
            if area.height > box_area.height {
                let error_area = Rect::new(area.x + 1, box_area.bottom(), area.width.saturating_sub(1), 1);
                frame.render_widget(
                    Paragraph::new(Span::styled(error, self.theme.error_style())),
                    error_area,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::testing::{contains, draw};

    fn type_text(state: &mut MultiInputState, text: &str) {
        for c in text.chars() {
            state.insert_char(c);
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_commit_new_value_appends() {
        let mut state = MultiInputState::new(Vec::<String>::new());
        type_text(&mut state, "x");
        assert_eq!(state.commit(), InputOutcome::Changed(vec!["x".to_string()]));
        assert_eq!(state.chips(), ["x"]);
        assert_eq!(state.pending(), "");
    }

    #[test]
    fn test_commit_duplicate_is_ignored() {
        let mut state = MultiInputState::new(["a", "b"]);
        type_text(&mut state, "a");
        assert_eq!(state.commit(), InputOutcome::Ignored);
        assert_eq!(state.chips(), ["a", "b"]);
        // The pending text stays for the user to edit.
        assert_eq!(state.pending(), "a");
    }

    #[test]
    fn test_commit_empty_is_ignored() {
        let mut state = MultiInputState::new(["a"]);
        assert_eq!(state.commit(), InputOutcome::Ignored);
        assert_eq!(state.chips(), ["a"]);
    }

    #[test]
    fn test_duplicates_compare_exactly() {
        let mut state = MultiInputState::new(["Rust"]);
        type_text(&mut state, "rust");
        assert!(state.commit().changed().is_some());
        type_text(&mut state, "Rust ");
        assert!(state.commit().changed().is_some());
        assert_eq!(state.chips(), ["Rust", "rust", "Rust "]);
    }

    #[test]
    fn test_commit_keeps_order() {
        let mut state = MultiInputState::new(["a", "b"]);
        type_text(&mut state, "c");
        assert_eq!(
            state.commit().changed(),
            Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
        );
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut state = MultiInputState::new(["a", "b", "c"]);
        assert_eq!(
            state.remove("b"),
            InputOutcome::Changed(vec!["a".to_string(), "c".to_string()])
        );
        assert_eq!(state.remove("zzz"), InputOutcome::Ignored);
        assert_eq!(state.chips(), ["a", "c"]);
    }

    #[test]
    fn test_remove_drops_one_instance() {
        // Seeded values are not deduplicated.
        let mut state = MultiInputState::new(["a", "b", "a"]);
        assert_eq!(
            state.remove("a"),
            InputOutcome::Changed(vec!["b".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn test_clear_always_reports_empty() {
        let mut state = MultiInputState::new(["a", "b"]);
        type_text(&mut state, "pending");
        assert_eq!(state.clear(), InputOutcome::Changed(Vec::new()));
        assert!(state.chips().is_empty());
        assert_eq!(state.pending(), "");

        assert_eq!(state.clear(), InputOutcome::Changed(Vec::new()));
    }

    #[test]
    fn test_disabled_blocks_typing_and_commit() {
        let mut state = MultiInputState::new(["a", "b"]);
        type_text(&mut state, "c");
        state.set_disabled(true);

        assert_eq!(state.insert_char('d'), InputOutcome::Ignored);
        assert_eq!(state.commit(), InputOutcome::Ignored);
        assert_eq!(state.pending(), "c");

        // No key reaches a disabled control, removal and clear included.
        for key_event in [
            key(KeyCode::Enter),
            key(KeyCode::Backspace),
            key(KeyCode::Left),
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(state.handle_key(key_event), InputOutcome::Ignored);
        }
        assert_eq!(state.chips(), ["a", "b"]);
        assert_eq!(state.pending(), "c");

        // The owner can still edit the list directly.
        assert_eq!(state.remove("a"), InputOutcome::Changed(vec!["b".to_string()]));
        assert_eq!(state.clear(), InputOutcome::Changed(Vec::new()));
    }

    #[test]
    fn test_arrow_keys_pick_and_remove_any_chip() {
        let mut state = MultiInputState::new(["rust", "analysis", "sql"]);

        assert_eq!(state.handle_key(key(KeyCode::Left)), InputOutcome::Edited);
        assert_eq!(state.selected(), Some(2));
        assert_eq!(state.handle_key(key(KeyCode::Left)), InputOutcome::Edited);
        assert_eq!(state.selected(), Some(1));

        assert_eq!(
            state.handle_key(key(KeyCode::Delete)),
            InputOutcome::Changed(vec!["rust".to_string(), "sql".to_string()])
        );
        // Selection stays on the chip that moved into the gap.
        assert_eq!(state.selected(), Some(1));

        assert_eq!(state.handle_key(key(KeyCode::Left)), InputOutcome::Edited);
        assert_eq!(state.handle_key(key(KeyCode::Left)), InputOutcome::Ignored);
        assert_eq!(
            state.handle_key(key(KeyCode::Backspace)),
            InputOutcome::Changed(vec!["sql".to_string()])
        );
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_right_past_last_chip_returns_to_text() {
        let mut state = MultiInputState::new(["a", "b"]);
        assert_eq!(state.handle_key(key(KeyCode::Right)), InputOutcome::Edited);
        assert_eq!(state.selected(), None);

        state.handle_key(key(KeyCode::Left));
        state.handle_key(key(KeyCode::Left));
        state.handle_key(key(KeyCode::Right));
        assert_eq!(state.selected(), Some(1));
        state.handle_key(key(KeyCode::Right));
        assert_eq!(state.selected(), None);

        // Typing drops the selection, so Backspace edits the text again.
        state.handle_key(key(KeyCode::Left));
        state.handle_key(key(KeyCode::Char('z')));
        assert_eq!(state.selected(), None);
        assert_eq!(state.handle_key(key(KeyCode::Backspace)), InputOutcome::Edited);
        assert_eq!(state.chips(), ["a", "b"]);
    }

    #[test]
    fn test_reset_reseeds_chips() {
        let mut state = MultiInputState::new(["a", "b", "c"]);
        state.handle_key(key(KeyCode::Left));
        assert_eq!(state.selected(), Some(2));
        type_text(&mut state, "draft");
        state.reset(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(state.chips(), ["x", "y"]);
        assert_eq!(state.pending(), "draft");

        let mut state = MultiInputState::new(["a", "b", "c"]);
        state.handle_key(key(KeyCode::Left));
        state.reset(vec!["x".to_string()]);
        assert_eq!(state.selected(), Some(0));
        state.reset(Vec::<String>::new());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_key_handling() {
        let mut state = MultiInputState::new(["a"]);
        assert_eq!(state.handle_key(key(KeyCode::Char('b'))), InputOutcome::Edited);
        assert_eq!(state.handle_key(key(KeyCode::Char('c'))), InputOutcome::Edited);
        assert_eq!(state.handle_key(key(KeyCode::Left)), InputOutcome::Edited);
        assert_eq!(state.handle_key(key(KeyCode::Backspace)), InputOutcome::Edited);
        assert_eq!(state.pending(), "c");

        assert_eq!(
            state.handle_key(key(KeyCode::Enter)),
            InputOutcome::Changed(vec!["a".to_string(), "c".to_string()])
        );

        // Backspace on empty text pops the last chip.
        assert_eq!(
            state.handle_key(key(KeyCode::Backspace)),
            InputOutcome::Changed(vec!["a".to_string()])
        );

        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            InputOutcome::Changed(Vec::new())
        );
        assert_eq!(state.handle_key(key(KeyCode::Backspace)), InputOutcome::Ignored);
    }

    #[test]
    fn test_chip_lines_wrap() {
        let chips: Vec<String> = ["alpha", "beta", "gamma"].iter().map(|s| s.to_string()).collect();
        // " alpha x " = 9, " beta x " = 8 (+1 gap) -> 18 fits in 20
        let lines = chip_lines(&chips, 20);
        let labels: Vec<Vec<(usize, &str)>> = lines
            .iter()
            .map(|line| line.iter().map(|(i, l)| (*i, l.as_str())).collect())
            .collect();
        assert_eq!(labels, vec![vec![(0, "alpha"), (1, "beta")], vec![(2, "gamma")]]);
        assert!(chip_lines(&[], 20).is_empty());
    }

    #[test]
    fn test_long_chip_is_shortened_to_fit() {
        let chips = vec!["distributed systems design".to_string()];
        let lines = chip_lines(&chips, 16);
        // 16 columns leave 12 for the label once " " and " x " are drawn.
        assert_eq!(lines, vec![vec![(0, "distribut...".to_string())]]);
    }

    #[test]
    fn test_height_saturates_with_many_chips() {
        let state = MultiInputState::new((0..70_000).map(|i| i.to_string()));
        assert_eq!(MultiInput::new(&state).height(2), u16::MAX);
    }

    #[test]
    fn test_render_highlights_selected_chip() {
        let mut state = MultiInputState::new(["rust", "go"]);
        state.handle_key(key(KeyCode::Left));
        let theme = Theme::default();
        let widget = MultiInput::new(&state).label("Skills").focused(true);

        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                widget.render(frame, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        // " rust x " starts at column 1, " go x " at column 10.
        assert_eq!(buffer[(2, 1)].style().bg, theme.chip_style().bg);
        assert!(buffer[(11, 1)]
            .style()
            .add_modifier
            .contains(ratatui::style::Modifier::REVERSED));
        assert!(!buffer[(2, 1)]
            .style()
            .add_modifier
            .contains(ratatui::style::Modifier::REVERSED));
    }

    #[test]
    fn test_render_chips_placeholder_and_error() {
        let state = MultiInputState::new(["rust", "go"]);
        let widget = MultiInput::new(&state)
            .label("Skills")
            .error(Some("Add at least three skills"));
        assert!(widget.is_invalid());
        assert_eq!(widget.height(40), 5);

        let lines = draw(40, 5, |frame| {
            let area = frame.area();
            widget.render(frame, area);
        });
        assert!(lines[0].contains("Skills"));
        assert!(lines[1].contains("rust x") && lines[1].contains("go x"));
        assert!(lines[2].contains(DEFAULT_PLACEHOLDER));
        assert!(lines[4].contains("Add at least three skills"));
    }

    #[test]
    fn test_render_pending_text_shows_controls() {
        let mut state = MultiInputState::new(Vec::<String>::new());
        type_text(&mut state, "sql");
        let widget = MultiInput::new(&state).label("Skills").focused(true);
        assert!(!widget.is_invalid());
        assert_eq!(widget.height(40), 3);

        let lines = draw(60, 3, |frame| {
            let area = frame.area();
            widget.render(frame, area);
        });
        assert!(contains(&lines, "sql|"));
        assert!(contains(&lines, "[Enter] add"));
        assert!(!contains(&lines, DEFAULT_PLACEHOLDER));
    }
}
