//! pocket-storage-json
//!
//! Filesystem JSON persistence for the three entry collections.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use pocket_domain::{Entry, EntryKind, LedgerSnapshot};
use pocket_services::{
    storage::{remove_entry, upsert_entry, EntryRepository},
    CoreError,
};
use tracing::debug;
use uuid::Uuid;

const DATA_FILE: &str = "entries.json";
const TMP_SUFFIX: &str = "tmp";

/// Keeps every entry in a single `entries.json` document.
///
/// Each mutation rewrites the whole document through a temporary file and a
/// rename, so readers never see a half-written file.
#[derive(Debug, Clone)]
pub struct JsonEntryStore {
    path: PathBuf,
}

impl JsonEntryStore {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            path: data_dir.join(DATA_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored document; a missing file is an empty snapshot.
    pub fn load(&self) -> Result<LedgerSnapshot, CoreError> {
        load_snapshot_from_path(&self.path)
    }

    pub fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), CoreError> {
        save_snapshot_to_path(snapshot, &self.path)
    }

    fn update<T>(
        &self,
        change: impl FnOnce(&mut LedgerSnapshot) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let mut snapshot = self.load()?;
        let outcome = change(&mut snapshot)?;
        self.save(&snapshot)?;
        Ok(outcome)
    }
}

impl EntryRepository for JsonEntryStore {
    fn list_entries(&self, kind: EntryKind) -> Result<Vec<Entry>, CoreError> {
        let mut snapshot = self.load()?;
        Ok(std::mem::take(snapshot.entries_mut(kind)))
    }

    fn upsert(&mut self, kind: EntryKind, entry: Entry) -> Result<(), CoreError> {
        self.update(|snapshot| upsert_entry(snapshot, kind, entry))
    }

    fn delete(&mut self, kind: EntryKind, id: Uuid) -> Result<(), CoreError> {
        self.update(|snapshot| remove_entry(snapshot, kind, id).map(|_| ()))
    }

    fn clear(&mut self) -> Result<(), CoreError> {
        self.save(&LedgerSnapshot::default())
    }

    fn snapshot(&self) -> Result<LedgerSnapshot, CoreError> {
        self.load()
    }
}

/// Loads a snapshot from an arbitrary path on disk.
pub fn load_snapshot_from_path(path: &Path) -> Result<LedgerSnapshot, CoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "no entry file yet");
        return Ok(LedgerSnapshot::default());
    }
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

/// Saves a snapshot to an arbitrary path on disk.
pub fn save_snapshot_to_path(snapshot: &LedgerSnapshot, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(snapshot).map_err(|err| CoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), entries = snapshot.len(), "saved entries");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
