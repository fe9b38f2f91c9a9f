//! Draft persistence.
//!
//! The "remember across teardown" behavior as an explicit serialize/restore
//! pair: the shell saves the compose field values when the user leaves the
//! compose screen and restores them at startup. Only values are persisted,
//! never focus or error flags.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::state::compose::DraftSnapshot;

fn draft_path() -> Option<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "Outbox")?;
    Some(proj_dirs.data_dir().join("draft.json"))
}

/// Loads the persisted draft, if any.
///
/// Any failure (missing file, unreadable JSON) degrades to `None`; a lost
/// draft is not worth an error dialog at startup.
pub fn load() -> Option<DraftSnapshot> {
    let path = draft_path()?;
    let content = fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<DraftSnapshot>(&content) {
        Ok(snapshot) if !snapshot.is_empty() => {
            tracing::info!("Restored draft from {}", path.display());
            Some(snapshot)
        }
        Ok(_) => None,
        Err(err) => {
            tracing::warn!("Ignoring unreadable draft file: {err}");
            None
        }
    }
}

/// Persists the draft, or deletes the file when the draft is empty.
pub fn save(snapshot: &DraftSnapshot) -> Result<()> {
    let path = draft_path().context("no platform data directory")?;

    if snapshot.is_empty() {
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("removing {}", path.display()))?;
        }
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(snapshot).context("serializing draft")?;
    fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
