//! Data service behind the profile and services views.
//!
//! The views only see [`ProfileApi`]. The crate ships an in-memory
//! implementation seeded from a JSON fixture; a networked implementation
//! lives with the host application.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::banner::Banner;
use crate::error::CoreError;
use crate::profile::{Profile, ProfileUpdate};

/// Get/update capability for the signed-in user's data.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch the current profile.
    async fn get_me(&self) -> Result<Profile, CoreError>;

    /// Validate and persist profile edits, returning the stored profile.
    async fn update_me(&self, update: ProfileUpdate) -> Result<Profile, CoreError>;

    /// Replace the profile banner.
    async fn update_banner(&self, banner: Banner) -> Result<Profile, CoreError>;

    /// Rows for the services table.
    async fn list_services(&self) -> Result<Vec<Map<String, Value>>, CoreError>;
}

/// Seed data for [`MemoryProfileApi`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    /// Profile returned by `get_me`; `None` makes every profile call fail.
    #[serde(default)]
    pub profile: Option<Profile>,
    /// Arbitrary service records.
    #[serde(default)]
    pub services: Vec<Map<String, Value>>,
}

impl Fixture {
    /// Load a fixture from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Built-in sample data.
    pub fn demo() -> Self {
        let services = [
            json!({ "id": "svc-1", "name": "Code review", "provider": "ada", "rate": 80, "remote": true }),
            json!({ "id": "svc-2", "name": "Architecture audit", "provider": "grace", "rate": 150, "remote": false }),
            json!({ "id": "svc-3", "name": "Mentoring", "provider": "", "rate": 0, "remote": true }),
        ]
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();

        Self {
            profile: Some(Profile {
                id: "me".to_string(),
                name: "Ada Lovelace".to_string(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                phone_number: "0123456789".to_string(),
                skills: vec!["rust".to_string(), "analysis".to_string()],
                banner: None,
                updated_at: None,
            }),
            services,
        }
    }
}

/// In-process [`ProfileApi`] holding its data behind an async lock.
#[derive(Debug, Default)]
pub struct MemoryProfileApi {
    data: RwLock<Fixture>,
}

impl MemoryProfileApi {
    pub fn new(fixture: Fixture) -> Self {
        Self {
            data: RwLock::new(fixture),
        }
    }
}

#[async_trait]
impl ProfileApi for MemoryProfileApi {
    async fn get_me(&self) -> Result<Profile, CoreError> {
        let data = self.data.read().await;
        data.profile
            .clone()
            .ok_or_else(|| CoreError::ProfileNotFound("me".to_string()))
    }

    async fn update_me(&self, update: ProfileUpdate) -> Result<Profile, CoreError> {
        update.validate().map_err(CoreError::Validation)?;

        let mut data = self.data.write().await;
        let profile = data
            .profile
            .as_mut()
            .ok_or_else(|| CoreError::ProfileNotFound("me".to_string()))?;

        profile.name = update.name;
        profile.username = update.username;
        profile.email = update.email;
        profile.phone_number = update.phone_number;
        profile.skills = update.skills;
        profile.updated_at = Some(Utc::now());

        info!(id = %profile.id, skills = profile.skills.len(), "Profile updated");
        Ok(profile.clone())
    }

    async fn update_banner(&self, banner: Banner) -> Result<Profile, CoreError> {
        let mut data = self.data.write().await;
        let profile = data
            .profile
            .as_mut()
            .ok_or_else(|| CoreError::ProfileNotFound("me".to_string()))?;

        debug!(id = %profile.id, bytes = banner.banner_base64.len(), "Storing banner");
        profile.banner = Some(banner.banner_base64);
        profile.updated_at = Some(Utc::now());
        Ok(profile.clone())
    }

    async fn list_services(&self) -> Result<Vec<Map<String, Value>>, CoreError> {
        Ok(self.data.read().await.services.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Field;

    #[tokio::test]
    async fn test_get_and_update_me() {
        let api = MemoryProfileApi::new(Fixture::demo());
        let me = api.get_me().await.unwrap();
        assert_eq!(me.username, "ada");

        let mut update = me.to_update();
        update.phone_number = "9876543210".to_string();
        update.skills.push("mentoring".to_string());

        let stored = api.update_me(update).await.unwrap();
        assert_eq!(stored.phone_number, "9876543210");
        assert_eq!(stored.skills, vec!["rust", "analysis", "mentoring"]);
        assert!(stored.updated_at.is_some());
        assert_eq!(api.get_me().await.unwrap(), stored);
    }

    #[tokio::test]
    async fn test_invalid_update_is_rejected() {
        let api = MemoryProfileApi::new(Fixture::demo());
        let mut update = api.get_me().await.unwrap().to_update();
        update.phone_number = "123".to_string();

        match api.update_me(update).await {
            Err(CoreError::Validation(errors)) => {
                assert_eq!(errors.get(Field::PhoneNumber), Some("Invalid phone number"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(api.get_me().await.unwrap().phone_number, "0123456789");
    }

    #[tokio::test]
    async fn test_missing_profile() {
        let api = MemoryProfileApi::default();
        assert!(matches!(
            api.get_me().await,
            Err(CoreError::ProfileNotFound(_))
        ));
        assert!(api.list_services().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_banner() {
        let api = MemoryProfileApi::new(Fixture::demo());
        let stored = api
            .update_banner(Banner::from_bytes(b"img", "image/png"))
            .await
            .unwrap();
        assert_eq!(stored.banner.as_deref(), Some("data:image/png;base64,aW1n"));
    }

    #[test]
    fn test_fixture_parses_partial_json() {
        let fixture: Fixture =
            serde_json::from_str(r#"{"services":[{"name":"Ada"}]}"#).unwrap();
        assert!(fixture.profile.is_none());
        assert_eq!(fixture.services.len(), 1);
    }
}
