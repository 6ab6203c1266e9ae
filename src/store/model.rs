//! Task data model

use std::fmt;

/// Task state, matching the on-disk record token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Not yet completed
    Todo,
    /// Completed
    Done,
}

impl TaskState {
    /// Parse the state token of a persisted record.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "TODO" => Some(Self::Todo),
            "DONE" => Some(Self::Done),
            _ => None,
        }
    }

    /// The token written at the start of a persisted record.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A task is just a name. Equality is exact string match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The in-memory task lists, one per state, insertion order preserved.
///
/// Duplicate names are permitted; completion moves the first pending
/// match only. A name is never in both lists as the same entry because
/// completion is a move, not a copy.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    pub(crate) pending: Vec<Task>,
    pub(crate) done: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pending task. Empty and whitespace-only names are
    /// rejected as a no-op; returns whether the task was added.
    pub fn add(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.pending.push(Task::new(name));
        true
    }

    /// Move the first pending task with this exact name to the done
    /// list. Returns false (and mutates nothing) when no match exists.
    pub fn complete(&mut self, name: &str) -> bool {
        let Some(idx) = self.pending.iter().position(|t| t.name == name) else {
            return false;
        };
        let task = self.pending.remove(idx);
        self.done.push(task);
        true
    }

    /// Linear exact-match scan of the pending list.
    pub fn contains_pending(&self, name: &str) -> bool {
        self.pending.iter().any(|t| t.name == name)
    }

    /// The tasks in one state, in insertion order.
    pub fn list(&self, state: TaskState) -> &[Task] {
        match state {
            TaskState::Todo => &self.pending,
            TaskState::Done => &self.done,
        }
    }

    pub fn len(&self, state: TaskState) -> usize {
        self.list(state).len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.done.is_empty()
    }

    /// Used by the loader to rebuild a store from persisted records.
    pub(crate) fn push(&mut self, state: TaskState, name: impl Into<String>) {
        let task = Task::new(name);
        match state {
            TaskState::Todo => self.pending.push(task),
            TaskState::Done => self.done.push(task),
        }
    }
}
