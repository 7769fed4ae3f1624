//! Persistent session store
//!
//! One JSON file holds the session user, the demo token, and the theme
//! preference. Writes overwrite the file wholesale; there is no schema
//! versioning and no expiry. Single-writer by construction: only the CLI
//! process touches the file.

use crate::auth::UserIdentity;
use crate::errors::{AssistError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Contents of the session file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionData {
    pub user: Option<UserIdentity>,
    pub token: Option<String>,

    #[serde(default)]
    pub theme: ThemeMode,
}

/// File-backed session store
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store over an explicit file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load session data, defaulting to empty when the file is missing
    pub fn load(&self) -> Result<SessionData> {
        if !self.path.exists() {
            return Ok(SessionData::default());
        }

        let contents = fs::read_to_string(&self.path)?;
        let data = serde_json::from_str(&contents)
            .map_err(|e| AssistError::ConfigError(format!("corrupt session file: {}", e)))?;

        Ok(data)
    }

    /// Record a logged-in user and token, preserving the theme
    pub fn save_session(&self, user: UserIdentity, token: String) -> Result<()> {
        let mut data = self.load().unwrap_or_default();
        data.user = Some(user);
        data.token = Some(token);
        self.write(&data)
    }

    /// Drop user and token; the theme preference survives logout
    pub fn clear_session(&self) -> Result<()> {
        let mut data = self.load().unwrap_or_default();
        data.user = None;
        data.token = None;
        self.write(&data)
    }

    /// Persist a theme preference
    pub fn set_theme(&self, theme: ThemeMode) -> Result<()> {
        let mut data = self.load().unwrap_or_default();
        data.theme = theme;
        self.write(&data)
    }

    fn write(&self, data: &SessionData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_user() -> UserIdentity {
        UserIdentity {
            email: "demo@medassyst.ru".to_string(),
            role: "demo".to_string(),
            first_name: "Demo".to_string(),
            last_name: String::new(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        let data = store.load().unwrap();
        assert!(data.user.is_none());
        assert!(data.token.is_none());
        assert_eq!(data.theme, ThemeMode::Light);
    }

    #[test]
    fn test_save_and_load_session() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        store
            .save_session(test_user(), "demo-token".to_string())
            .unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.user.unwrap().email, "demo@medassyst.ru");
        assert_eq!(data.token.as_deref(), Some("demo-token"));
    }

    #[test]
    fn test_clear_session_keeps_theme() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        store.set_theme(ThemeMode::Dark).unwrap();
        store
            .save_session(test_user(), "demo-token".to_string())
            .unwrap();
        store.clear_session().unwrap();

        let data = store.load().unwrap();
        assert!(data.user.is_none());
        assert!(data.token.is_none());
        assert_eq!(data.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let store = SessionStore::new(path);
        assert!(matches!(store.load(), Err(AssistError::ConfigError(_))));
    }

    #[test]
    fn test_login_overwrites_previous_session() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        store
            .save_session(test_user(), "demo-token".to_string())
            .unwrap();

        let other = UserIdentity {
            email: "admin@medassyst.ru".to_string(),
            role: "admin".to_string(),
            first_name: "Admin".to_string(),
            last_name: String::new(),
        };
        store.save_session(other, "demo-token".to_string()).unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.user.unwrap().email, "admin@medassyst.ru");
    }
}
