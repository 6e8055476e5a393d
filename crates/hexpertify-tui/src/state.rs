//! UI state for rendering.

use serde_json::{Map, Value};

use hexpertify_components::{InputOutcome, MultiInputState, TableHover, TextBuffer};
use hexpertify_core::{Field, Profile, ProfileUpdate, ValidationErrors, SIDEBAR_LINKS};

/// Available views, one per navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Profile,
    Services,
    About,
    Contact,
}

impl View {
    pub fn all() -> &'static [View] {
        &[
            View::Home,
            View::Profile,
            View::Services,
            View::About,
            View::Contact,
        ]
    }

    pub fn index(&self) -> usize {
        View::all().iter().position(|v| v == self).unwrap_or(0)
    }

    /// Navigation label for this view.
    pub fn label(&self) -> &'static str {
        SIDEBAR_LINKS[self.index()].label
    }

    pub fn next(&self) -> View {
        let all = View::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> View {
        let all = View::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Loading state of the signed-in profile.
#[derive(Debug, Clone, Default)]
pub enum ProfileStatus {
    #[default]
    Loading,
    Loaded(Profile),
    Failed(String),
}

/// Which profile field receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    None,
    Phone,
    Skills,
}

/// Editable copy of the profile shown in the profile view.
///
/// Name, username and email are shown read-only; the phone number and
/// skills are editable.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: TextBuffer,
    pub username: TextBuffer,
    pub email: TextBuffer,
    pub phone: TextBuffer,
    pub skills: MultiInputState,
    /// Parent copy of the skills list, synchronised from chip changes.
    pub skills_value: Vec<String>,
    pub focus: FormFocus,
    pub errors: ValidationErrors,
    /// An update is in flight.
    pub saving: bool,
}

impl ProfileForm {
    /// Initialise every field from a stored profile.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: TextBuffer::new(profile.name.as_str()),
            username: TextBuffer::new(profile.username.as_str()),
            email: TextBuffer::new(profile.email.as_str()),
            phone: TextBuffer::new(profile.phone_number.as_str()),
            skills: MultiInputState::new(profile.skills.iter().cloned()),
            skills_value: profile.skills.clone(),
            focus: FormFocus::None,
            errors: ValidationErrors::default(),
            saving: false,
        }
    }

    /// Re-initialise from a stored profile, keeping focus and any skill
    /// text still being typed.
    pub fn reinitialize(&mut self, profile: &Profile) {
        let focus = self.focus;
        let mut skills = std::mem::take(&mut self.skills);
        skills.reset(profile.skills.iter().cloned());
        *self = Self::from_profile(profile);
        self.skills = skills;
        self.focus = focus;
        self.set_saving(false);
    }

    /// Current form values.
    pub fn values(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.value().to_string(),
            username: self.username.value().to_string(),
            email: self.email.value().to_string(),
            phone_number: self.phone.value().to_string(),
            skills: self.skills_value.clone(),
        }
    }

    /// Validate the form, keeping the messages for display.
    ///
    /// Returns the values to submit when they pass.
    pub fn submit(&mut self) -> Option<ProfileUpdate> {
        let values = self.values();
        match values.validate() {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                Some(values)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Apply a chip change reported by the skills input.
    ///
    /// Returns the values to submit when the list changed and the form
    /// is valid.
    pub fn apply_skills(&mut self, outcome: InputOutcome) -> Option<ProfileUpdate> {
        match outcome {
            InputOutcome::Changed(list) => {
                self.skills_value = list;
                self.submit()
            }
            InputOutcome::Edited | InputOutcome::Ignored => None,
        }
    }

    /// Validation message for a field.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Mark an update as in flight; edits are blocked until it settles.
    pub fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
        self.skills.set_disabled(saving);
    }
}

/// Banner upload dialog state.
#[derive(Debug, Clone, Default)]
pub struct BannerDialog {
    /// Image path typed by the user.
    pub path: TextBuffer,
    pub error: Option<String>,
    /// Upload in flight.
    pub uploading: bool,
}

impl BannerDialog {
    /// Path to upload, or a required-field error.
    pub fn submit(&mut self) -> Option<String> {
        let path = self.path.value().trim();
        if path.is_empty() {
            self.error = Some("Image is required".to_string());
            return None;
        }
        self.error = None;
        self.uploading = true;
        Some(path.to_string())
    }
}

/// Snapshot of data for rendering (no async, no locks).
#[derive(Debug, Default)]
pub struct UiState {
    /// Current view/tab.
    pub current_view: View,

    /// Signed-in profile.
    pub profile: ProfileStatus,

    /// Editable profile fields, present once the profile loaded.
    pub form: Option<ProfileForm>,

    /// Banner dialog, when open.
    pub banner_dialog: Option<BannerDialog>,

    /// Services table rows; `None` until loaded.
    pub services: Option<Vec<Map<String, Value>>>,

    /// Row under the pointer in the services table.
    pub services_hover: TableHover,

    /// Status message to display in footer.
    pub status_message: Option<String>,

    /// Last error message (if any).
    pub last_error: Option<String>,

    /// Frames drawn, drives the spinner.
    pub tick: u64,

    /// Set when the user asked to quit.
    pub quit: bool,
}

impl UiState {
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether key presses go to a text field rather than navigation.
    pub fn is_editing(&self) -> bool {
        self.banner_dialog.is_some()
            || self
                .form
                .as_ref()
                .is_some_and(|f| f.focus != FormFocus::None)
    }
}
