//! Persistence of the board state as one JSON record.
//!
//! The whole board — tasks plus UI preference flags — serializes into a
//! single logical record under the fixed `task-storage` namespace. The
//! [`StorageBackend`] trait is the seam between the store and the medium:
//! [`FileStorage`] keeps the record on disk (atomic tmp-file + rename),
//! [`MemoryStorage`] backs tests.
//!
//! Loading never fails: a missing record, unparseable JSON, or a record
//! whose `tasks` field is not an array all fall back to the seed task set.
//! Legacy records with uppercase enum labels or a missing `updatedAt`
//! normalize on the way in.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use slate_core::{time, Task};
use tracing::{debug, warn};

use crate::errors::Result;
use crate::seed::seed_tasks;

/// Namespace key for the persisted record.
pub const STORAGE_KEY: &str = "task-storage";

/// UI preference flags persisted alongside the tasks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardPrefs {
    /// Whether the onboarding tutorial has been completed.
    pub has_seen_tutorial: bool,
    /// Dark theme toggle.
    pub is_dark_mode: bool,
}

/// The full persisted record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    /// The task collection.
    pub tasks: Vec<Task>,
    /// UI preference flags.
    #[serde(flatten)]
    pub prefs: BoardPrefs,
}

/// Storage medium for the single board record.
pub trait StorageBackend {
    /// Read the raw record, or `None` if nothing has been stored yet.
    fn read(&self) -> Result<Option<String>>;
    /// Replace the record.
    fn write(&self, payload: &str) -> Result<()>;
}

/// Load and normalize the persisted state, seeding on any failure.
pub fn load_state(backend: &dyn StorageBackend) -> PersistedState {
    match backend.read() {
        Ok(Some(raw)) => parse_state(&raw).unwrap_or_else(|| {
            warn!("persisted record unusable, seeding sample tasks");
            seeded()
        }),
        Ok(None) => {
            debug!("no persisted record, seeding sample tasks");
            seeded()
        }
        Err(err) => {
            warn!(error = %err, "failed to read persisted record, seeding sample tasks");
            seeded()
        }
    }
}

fn seeded() -> PersistedState {
    PersistedState {
        tasks: seed_tasks(time::now_ms()),
        prefs: BoardPrefs::default(),
    }
}

/// Parse a raw record. `None` means malformed: invalid JSON, a missing
/// `tasks` field, a `tasks` field that is not an array, or a task record
/// with a label outside the closed enums.
fn parse_state(raw: &str) -> Option<PersistedState> {
    let value: Value = serde_json::from_str(raw).ok()?;
    if !value.get("tasks")?.is_array() {
        return None;
    }
    let mut state: PersistedState = serde_json::from_value(value).ok()?;
    for task in &mut state.tasks {
        // Legacy records predate updatedAt.
        if task.updated_at == 0 {
            task.updated_at = task.created_at;
        }
    }
    debug!(tasks = state.tasks.len(), "loaded persisted board state");
    Some(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// File backend
// ─────────────────────────────────────────────────────────────────────────────

/// File-backed storage: one JSON file, replaced atomically on every write.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Store the record at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `~/.slate/task-storage.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        PathBuf::from(home)
            .join(".slate")
            .join(format!("{STORAGE_KEY}.json"))
    }

    /// The file this backend reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileStorage {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn write(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write-then-rename so a crash mid-write never truncates the record.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, payload)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory backend
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory storage with a cloneable handle, for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    cell: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// An empty backend (no record stored).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-loaded with a raw record.
    #[must_use]
    pub fn with_record(raw: &str) -> Self {
        Self {
            cell: Arc::new(Mutex::new(Some(raw.to_string()))),
        }
    }

    /// The current stored record, if any.
    #[must_use]
    pub fn record(&self) -> Option<String> {
        self.cell
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.record())
    }

    fn write(&self, payload: &str) -> Result<()> {
        *self.cell.lock().unwrap_or_else(PoisonError::into_inner) = Some(payload.to_string());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
