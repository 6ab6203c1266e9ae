//! Flat-file task persistence
//!
//! Records live in `$HOME/.tasks`, one per line: `TODO <name>` or
//! `DONE <name>`. Adds are pure appends; completions rewrite the whole
//! file through a temp file so a partial write never corrupts it.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use super::model::{TaskState, TaskStore};

pub const TASKS_FILE_NAME: &str = ".tasks";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Cannot find home directory")]
    NoHomeDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Storage at the fixed per-user path, `$HOME/.tasks`.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().ok_or(StorageError::NoHomeDir)?;
        Ok(Self {
            path: home.join(TASKS_FILE_NAME),
        })
    }

    /// Storage at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a store from the persisted records. A missing file is an
    /// empty store, not an error. Rows that don't split into a known
    /// state token and a non-empty name are dropped.
    pub fn load(&self) -> Result<TaskStore> {
        let mut store = TaskStore::new();

        if !self.path.exists() {
            return Ok(store);
        }

        let content = fs::read_to_string(&self.path)?;
        for line in content.lines() {
            let Some((token, name)) = line.split_once(' ') else {
                debug!("Dropping record with no separator: {:?}", line);
                continue;
            };
            let Some(state) = TaskState::parse(token) else {
                debug!("Dropping record with unknown state token: {:?}", line);
                continue;
            };
            if name.trim().is_empty() {
                debug!("Dropping record with empty name: {:?}", line);
                continue;
            }
            store.push(state, name);
        }

        Ok(store)
    }

    /// Append a single pending record. Never touches existing content.
    pub fn append(&self, name: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} {}", TaskState::Todo.token(), name)?;
        Ok(())
    }

    /// Serialize the whole store and atomically replace the tasks file.
    /// Pending records first (insertion order), then done records
    /// (completion order); reload order per list is unchanged.
    pub fn rewrite(&self, store: &TaskStore) -> Result<()> {
        // parent() yields "" for bare relative paths
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;

        for state in [TaskState::Todo, TaskState::Done] {
            for task in store.list(state) {
                writeln!(tmp, "{} {}", state.token(), task.name)?;
            }
        }

        tmp.persist(&self.path).map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }
}
