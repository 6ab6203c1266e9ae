//! Task store module
//!
//! In-memory pending/done task lists backed by a flat text file:
//! - one `TODO <name>` or `DONE <name>` record per line
//! - append-only write on add, full-file rewrite on completion

pub mod model;
pub mod storage;

pub use model::{Task, TaskState, TaskStore};
pub use storage::{Storage, StorageError};
