//! Session persistence: the logged-in account is kept on disk so later
//! commands can reuse its `key`/`secret`.
//!
//! The session file lives at `~/.config/hearthis/session.json` and holds the
//! account as returned by `/login`:
//!
//! ```json
//! { "user": { "id": 12345678, "permalink": "mymail-oc", "key": "…", "secret": "…", … } }
//! ```

use anyhow::{Context, Result};
use hearthis_api::types::AuthenticatedUser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Persistent login session backed by a JSON file on disk.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<AuthenticatedUser>,
}

impl Session {
    /// Load the session. Returns an empty session if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("corrupt session file {}", path.display()))
    }

    /// Save the session, creating parent directories if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(&path, data).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "session saved");
        Ok(())
    }

    /// Delete the session file.
    pub fn clear() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(&path)?;
            debug!(path = %path.display(), "session removed");
        }
        Ok(())
    }

    /// The stored account, or an error telling the user to log in.
    pub fn require_user(&self) -> Result<&AuthenticatedUser> {
        self.user
            .as_ref()
            .context("not logged in; run `hearthis login <email> <password>` first")
    }

    fn path() -> Result<PathBuf> {
        let config = dirs::config_dir().context("cannot determine config directory")?;
        Ok(config.join("hearthis").join("session.json"))
    }
}
