//! Profile model and form validation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The signed-in user's profile as returned by the data service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Stable profile identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Handle shown as `@username`.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Ten digit phone number.
    pub phone_number: String,
    /// Areas of expertise, edited through the chip input.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Banner image as a base64 data URL.
    #[serde(default)]
    pub banner: Option<String>,
    /// Last time the profile was written.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Form values pre-filled from this profile.
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            skills: self.skills.clone(),
        }
    }
}

/// Values submitted from the profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ProfileUpdate {
    /// Check every field, collecting one message per failing field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.is_empty() {
            errors.insert(Field::Name, "Name is required");
        }
        if self.username.is_empty() {
            errors.insert(Field::Username, "Username is required");
        }
        if self.email.is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !email_pattern().is_match(&self.email) {
            errors.insert(Field::Email, "Invalid email");
        }
        if self.phone_number.is_empty() {
            errors.insert(Field::PhoneNumber, "Phone number is required");
        } else if !phone_pattern().is_match(&self.phone_number) {
            errors.insert(Field::PhoneNumber, "Invalid phone number");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

fn phone_pattern() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"))
}

/// A form field that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Username,
    Email,
    PhoneNumber,
    Banner,
}

impl Field {
    /// Label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Username => "Username",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::Banner => "Banner",
        }
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<Field, String>,
}

impl ValidationErrors {
    /// Record a message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.label(), message)?;
        }
        Ok(())
    }
}
