//! Interactive command loop
//!
//! Reads one command per line from stdin in cooked mode, drives the
//! task store and its storage, and re-renders the fixed screen region
//! after each command. End of input ends the loop; the process exits 0.

mod screen;

pub use screen::Screen;

use std::io::{self, BufRead};

use anyhow::Result;
use tracing::warn;

use crate::command::Command;
use crate::store::{Storage, TaskState, TaskStore};

pub fn run() -> Result<()> {
    let storage = Storage::new()?;
    let mut store = storage.load()?;

    let mut screen = Screen::new();
    screen.reset()?;
    screen.draw_tasks(store.list(TaskState::Todo))?;
    screen.move_to_input()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        screen.clear_status()?;

        dispatch(Command::parse(&line), &mut store, &storage, &mut screen)?;

        screen.move_to_input()?;
    }

    screen.clear_all()?;
    Ok(())
}

/// Run one command against the store, persist the change, and report.
/// Write failures are non-fatal: the in-memory state keeps the change
/// and the failure is logged.
fn dispatch(
    command: Command,
    store: &mut TaskStore,
    storage: &Storage,
    screen: &mut Screen,
) -> Result<()> {
    match command {
        Command::Add(name) => {
            if store.add(&name) {
                if let Err(e) = storage.append(&name) {
                    warn!(
                        "Failed to append task to {}: {}",
                        storage.path().display(),
                        e
                    );
                }
                screen.status("Added task")?;
            }
            screen.draw_tasks(store.list(TaskState::Todo))?;
        }
        Command::Complete(name) => {
            if store.complete(&name) {
                if let Err(e) = storage.rewrite(store) {
                    warn!(
                        "Failed to rewrite {}: {}",
                        storage.path().display(),
                        e
                    );
                }
                screen.status("Marked task as complete")?;
            } else {
                screen.status("Not found.")?;
            }
            screen.draw_tasks(store.list(TaskState::Todo))?;
        }
        Command::ShowPending => {
            screen.status("Printing TODO")?;
            screen.draw_tasks(store.list(TaskState::Todo))?;
        }
        Command::ShowDone => {
            screen.status("Printing DONE")?;
            screen.draw_tasks(store.list(TaskState::Done))?;
        }
        Command::Invalid => {
            screen.status("Not a valid command!")?;
        }
    }
    Ok(())
}
