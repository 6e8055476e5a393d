//! Application state and main event loop.

use std::time::Duration;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::event::{BackendCommand, UiEvent};
use crate::state::{BannerDialog, FormFocus, ProfileForm, ProfileStatus, UiState, View};
use crate::ui;

/// Main application with UI state and channel handles.
pub struct App {
    /// Current UI state snapshot for rendering.
    state: UiState,

    /// Receiver for events from the backend.
    ui_rx: mpsc::Receiver<UiEvent>,

    /// Sender for commands to the backend.
    cmd_tx: mpsc::Sender<BackendCommand>,

    /// Input poll timeout between redraws.
    tick: Duration,
}

impl App {
    /// Create a new application instance with channel handles.
    pub fn new(
        ui_rx: mpsc::Receiver<UiEvent>,
        cmd_tx: mpsc::Sender<BackendCommand>,
        tick: Duration,
    ) -> Self {
        Self {
            state: UiState::default(),
            ui_rx,
            cmd_tx,
            tick,
        }
    }

    /// Run the main event loop.
    ///
    /// This runs on the main thread and handles:
    /// - Drawing the UI
    /// - Processing keyboard and mouse input
    /// - Receiving updates from the backend
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        loop {
            terminal.draw(|frame| ui::render(frame, &self.state))?;
            self.state.tick = self.state.tick.wrapping_add(1);

            if event::poll(self.tick)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => {
                        let size = terminal.size()?;
                        self.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                    }
                    _ => {}
                }
            }

            while let Ok(event) = self.ui_rx.try_recv() {
                self.apply_event(event);
            }

            if self.state.should_quit() {
                break;
            }
        }

        self.send(BackendCommand::Quit);

        Ok(())
    }

    fn send(&self, cmd: BackendCommand) {
        if let Err(e) = self.cmd_tx.try_send(cmd) {
            warn!(error = %e, "Failed to send backend command");
        }
    }

    /// Apply an event from the backend to the UI state.
    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::ProfileLoaded(profile) => {
                match &mut self.state.form {
                    Some(form) => form.reinitialize(&profile),
                    None => self.state.form = Some(ProfileForm::from_profile(&profile)),
                }
                self.state.profile = ProfileStatus::Loaded(profile);
                self.set_status("Profile loaded");
            }
            UiEvent::ProfileLoadFailed(msg) => {
                self.state.profile = ProfileStatus::Failed(msg.clone());
                self.state.last_error = Some(msg);
            }
            UiEvent::ProfileSaved(profile) => {
                if let Some(form) = &mut self.state.form {
                    form.reinitialize(&profile);
                }
                self.state.profile = ProfileStatus::Loaded(profile);
                self.set_status("Profile saved");
            }
            UiEvent::ProfileRejected(errors) => {
                if let Some(form) = &mut self.state.form {
                    form.errors = errors;
                    form.set_saving(false);
                }
                self.state.last_error = Some("Please fix the highlighted fields".to_string());
            }
            UiEvent::ProfileUpdateFailed(msg) => {
                // Roll the form back to what the store still holds.
                if let Some(form) = &mut self.state.form {
                    match &self.state.profile {
                        ProfileStatus::Loaded(profile) => form.reinitialize(profile),
                        _ => form.set_saving(false),
                    }
                }
                self.state.last_error = Some(format!("Update failed: {}", msg));
            }
            UiEvent::BannerSaved(profile) => {
                self.state.banner_dialog = None;
                self.state.profile = ProfileStatus::Loaded(profile);
                self.set_status("Banner uploaded");
            }
            UiEvent::BannerFailed(msg) => {
                self.state.banner_dialog = None;
                self.state.last_error = Some(format!("Banner upload failed: {}", msg));
            }
            UiEvent::ServicesLoaded(rows) => {
                if self
                    .state
                    .services_hover
                    .hovered()
                    .is_some_and(|i| i >= rows.len())
                {
                    self.state.services_hover.leave();
                }
                self.state.services = Some(rows);
            }
            UiEvent::Error(msg) => {
                self.state.last_error = Some(msg);
            }
        }
    }

    fn set_status(&mut self, message: &str) {
        self.state.last_error = None;
        self.state.status_message = Some(message.to_string());
    }

    /// Track the pointer over the services table.
    fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        if self.state.current_view != View::Services || self.state.banner_dialog.is_some() {
            return;
        }
        let row_count = self.state.services.as_ref().map_or(0, Vec::len);
        let area = ui::services_table_area(screen);
        if self.state.services_hover.handle_mouse(mouse, area, row_count) {
            debug!(row = ?self.state.services_hover.hovered(), "Hover changed");
        }
    }

    /// Handle a key press.
    fn handle_key(&mut self, key: KeyEvent) {
        if self.state.banner_dialog.is_some() {
            self.handle_banner_key(key);
            return;
        }

        let focus = self.state.form.as_ref().map_or(FormFocus::None, |f| f.focus);
        match focus {
            FormFocus::Phone => self.handle_phone_key(key),
            FormFocus::Skills => self.handle_skills_key(key),
            FormFocus::None => self.handle_nav_key(key),
        }
    }

    fn handle_nav_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state.quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.quit = true;
            }

            // View switching with number keys
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                self.state.current_view = View::all()[index];
            }
            KeyCode::Tab => {
                self.state.current_view = self.state.current_view.next();
            }
            KeyCode::BackTab => {
                self.state.current_view = self.state.current_view.prev();
            }

            KeyCode::Char('r') => {
                self.send(BackendCommand::LoadProfile);
                self.send(BackendCommand::LoadServices);
            }

            KeyCode::Char('e') if self.state.current_view == View::Profile => {
                self.focus(FormFocus::Phone);
            }
            KeyCode::Char('s') if self.state.current_view == View::Profile => {
                self.focus(FormFocus::Skills);
            }
            KeyCode::Char('b') if self.state.current_view == View::Profile => {
                if matches!(self.state.profile, ProfileStatus::Loaded(_)) {
                    self.state.banner_dialog = Some(BannerDialog::default());
                }
            }

            _ => {}
        }
    }

    fn focus(&mut self, focus: FormFocus) {
        if let Some(form) = &mut self.state.form {
            form.focus = focus;
        }
    }

    fn handle_phone_key(&mut self, key: KeyEvent) {
        let Some(form) = &mut self.state.form else {
            return;
        };

        match key.code {
            KeyCode::Esc => form.focus = FormFocus::None,
            KeyCode::Tab | KeyCode::BackTab => form.focus = FormFocus::Skills,
            _ if form.saving => {}
            KeyCode::Enter => {
                if let Some(update) = form.submit() {
                    form.set_saving(true);
                    self.send(BackendCommand::UpdateProfile(update));
                }
            }
            KeyCode::Char(c) => form.phone.insert_char(c),
            KeyCode::Backspace => {
                form.phone.delete_char_before();
            }
            KeyCode::Delete => {
                form.phone.delete_char_at();
            }
            KeyCode::Left => form.phone.cursor_left(),
            KeyCode::Right => form.phone.cursor_right(),
            KeyCode::Home => form.phone.cursor_home(),
            KeyCode::End => form.phone.cursor_end(),
            _ => {}
        }
    }

    fn handle_skills_key(&mut self, key: KeyEvent) {
        let Some(form) = &mut self.state.form else {
            return;
        };

        match key.code {
            KeyCode::Esc => form.focus = FormFocus::None,
            KeyCode::Tab | KeyCode::BackTab => form.focus = FormFocus::Phone,
            _ => {
                let outcome = form.skills.handle_key(key);
                if let Some(update) = form.apply_skills(outcome) {
                    form.set_saving(true);
                    self.send(BackendCommand::UpdateProfile(update));
                }
            }
        }
    }

    fn handle_banner_key(&mut self, key: KeyEvent) {
        let Some(dialog) = &mut self.state.banner_dialog else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.state.banner_dialog = None,
            _ if dialog.uploading => {}
            KeyCode::Enter => {
                if let Some(path) = dialog.submit() {
                    self.send(BackendCommand::UploadBanner(path.into()));
                }
            }
            KeyCode::Char(c) => dialog.path.insert_char(c),
            KeyCode::Backspace => {
                dialog.path.delete_char_before();
            }
            KeyCode::Left => dialog.path.cursor_left(),
            KeyCode::Right => dialog.path.cursor_right(),
            _ => {}
        }
    }
}
