//! End-to-end scenarios through the public API: add/complete sequences
//! persisted to a tasks file and reloaded from it.

use tsk::store::{Storage, TaskState, TaskStore};

fn storage_in(dir: &tempfile::TempDir) -> Storage {
    Storage::with_path(dir.path().join(".tasks"))
}

fn names(store: &TaskStore, state: TaskState) -> Vec<String> {
    store
        .list(state)
        .iter()
        .map(|t| t.name.clone())
        .collect()
}

#[test]
fn add_to_empty_file_writes_todo_record() {
    let temp = tempfile::TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let mut store = storage.load().unwrap();
    assert!(store.is_empty());

    assert!(store.add("buy milk"));
    storage.append("buy milk").unwrap();

    assert_eq!(names(&store, TaskState::Todo), vec!["buy milk"]);
    let content = std::fs::read_to_string(storage.path()).unwrap();
    assert_eq!(content, "TODO buy milk\n");
}

#[test]
fn complete_moves_record_to_done() {
    let temp = tempfile::TempDir::new().unwrap();
    let storage = storage_in(&temp);

    storage.append("buy milk").unwrap();
    let mut store = storage.load().unwrap();

    assert!(store.complete("buy milk"));
    storage.rewrite(&store).unwrap();

    assert!(store.list(TaskState::Todo).is_empty());
    assert_eq!(names(&store, TaskState::Done), vec!["buy milk"]);
    let content = std::fs::read_to_string(storage.path()).unwrap();
    assert_eq!(content, "DONE buy milk\n");
}

#[test]
fn complete_nonexistent_changes_nothing() {
    let temp = tempfile::TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let mut store = storage.load().unwrap();
    assert!(!store.complete("nonexistent"));
    assert!(store.is_empty());
    // No rewrite happened, so no file appears either
    assert!(!storage.path().exists());
}

#[test]
fn duplicate_names_are_separate_entries() {
    let temp = tempfile::TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let mut store = storage.load().unwrap();
    for _ in 0..2 {
        assert!(store.add("water plants"));
        storage.append("water plants").unwrap();
    }

    let reloaded = storage.load().unwrap();
    assert_eq!(
        names(&reloaded, TaskState::Todo),
        vec!["water plants", "water plants"]
    );
}

#[test]
fn mixed_sequence_reloads_with_same_membership() {
    let temp = tempfile::TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let mut store = storage.load().unwrap();
    for name in ["write report", "buy milk", "call plumber"] {
        store.add(name);
        storage.append(name).unwrap();
    }

    store.complete("buy milk");
    storage.rewrite(&store).unwrap();

    store.add("buy eggs");
    storage.append("buy eggs").unwrap();

    store.complete("call plumber");
    storage.rewrite(&store).unwrap();

    let reloaded = storage.load().unwrap();
    assert_eq!(
        names(&reloaded, TaskState::Todo),
        names(&store, TaskState::Todo)
    );
    assert_eq!(
        names(&reloaded, TaskState::Done),
        names(&store, TaskState::Done)
    );
    assert_eq!(
        names(&reloaded, TaskState::Todo),
        vec!["write report", "buy eggs"]
    );
    assert_eq!(
        names(&reloaded, TaskState::Done),
        vec!["buy milk", "call plumber"]
    );
}

#[test]
fn pending_counts_track_adds_and_completes() {
    let temp = tempfile::TempDir::new().unwrap();
    let storage = storage_in(&temp);

    let mut store = storage.load().unwrap();

    store.add("one");
    assert_eq!(store.len(TaskState::Todo), 1);
    store.add("two");
    assert_eq!(store.len(TaskState::Todo), 2);

    assert!(store.complete("one"));
    assert_eq!(store.len(TaskState::Todo), 1);
    assert_eq!(store.len(TaskState::Done), 1);
    assert!(!store.contains_pending("one"));
    assert_eq!(store.list(TaskState::Done).last().unwrap().name, "one");
}
