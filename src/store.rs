//! Snapshot persistence.
//!
//! [`SnapshotStore`] is the seam to the data service. [`JsonFileStore`]
//! keeps one pretty-printed JSON file per learner, by default under
//! `~/.quest_tutor/`.

use crate::core::constants::SAVE_DIR_NAME;
use crate::snapshot::LearnerSnapshot;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub trait SnapshotStore {
    /// `Ok(None)` when no snapshot exists for `id`.
    fn load(&self, id: Uuid) -> io::Result<Option<LearnerSnapshot>>;
    fn save(&self, snapshot: &LearnerSnapshot) -> io::Result<()>;
}

/// Get the ~/.quest_tutor/ directory path.
pub fn default_save_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(SAVE_DIR_NAME))
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at [`default_save_dir`].
    pub fn in_home() -> io::Result<Self> {
        Ok(Self::new(default_save_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self, id: Uuid) -> io::Result<Option<LearnerSnapshot>> {
        let json = match fs::read_to_string(self.path_for(id)) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let snapshot = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &LearnerSnapshot) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        // Atomic replace
        let path = self.path_for(snapshot.character.id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;

        tracing::debug!(path = %path.display(), "saved learner snapshot");
        Ok(())
    }
}
