//! Persisted auth session.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::model::AuthSession;

const SESSION_DIR: &str = ".hearth";
const SESSION_FILE: &str = "session.json";

/// Persists the signed-in session under `.hearth/` so navigation stays
/// authenticated across runs.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
    path: PathBuf,
}

impl SessionStore {
    /// Create a new store rooted at the provided directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let path = root.join(SESSION_DIR).join(SESSION_FILE);
        Self { root, path }
    }

    /// Store rooted at the user's config directory, falling back to the
    /// working directory when the platform has none.
    pub fn for_user() -> Self {
        let root = dirs_next::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }

    /// Location of the persisted session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the most recently persisted session, if any.
    pub fn load(&self) -> Result<Option<AuthSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read session file at {}", self.path.display()))?;
        let session = serde_json::from_str(&data)
            .with_context(|| format!("invalid session data in {}", self.path.display()))?;
        Ok(Some(session))
    }

    /// Persist the session to disk, creating parent directories as needed.
    pub fn save(&self, session: &AuthSession) -> Result<()> {
        let dir = self.path.parent().unwrap_or(&self.root);
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create session directory {}", dir.display()))?;

        let data = serde_json::to_string_pretty(session).context("failed to serialize session")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write session file to {}", self.path.display()))?;
        Ok(())
    }

    /// Remove the persisted session (sign-out).
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("failed to remove session file at {}", self.path.display())
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> AuthSession {
        AuthSession {
            access_token: "jwt".into(),
            user_id: "u-1".into(),
            email: "me@example.org".into(),
        }
    }

    #[test]
    fn save_load_round_trip() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let store = SessionStore::new(temp.path());

        assert!(store.load()?.is_none());
        store.save(&session())?;
        assert_eq!(store.load()?, Some(session()));
        Ok(())
    }

    #[test]
    fn clear_removes_the_file() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let store = SessionStore::new(temp.path());

        store.save(&session())?;
        store.clear()?;
        assert!(store.load()?.is_none());
        // Clearing an absent session is fine.
        store.clear()?;
        Ok(())
    }

    #[test]
    fn corrupt_session_file_is_an_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let store = SessionStore::new(temp.path());
        fs::create_dir_all(store.path().parent().unwrap())?;
        fs::write(store.path(), "{not json")?;
        assert!(store.load().is_err());
        Ok(())
    }
}
