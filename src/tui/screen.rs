//! Fixed-region terminal rendering
//!
//! The layout mirrors a fixed three-band screen: the input prompt on
//! the top row, a one-line status band under it, and a 20-row task
//! region below that. Each band is cleared before it is redrawn.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    terminal::{Clear, ClearType},
};

use crate::store::Task;

const PROMPT: &str = "Input: ";
const STATUS_ROW: u16 = 1;
const LIST_ROW: u16 = 2;
const LIST_HEIGHT: u16 = 20;

pub struct Screen {
    out: Stdout,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Clear the whole screen and draw the input prompt.
    pub fn reset(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()
    }

    /// Clear the whole screen, leaving the cursor at the origin.
    pub fn clear_all(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Wipe the status band.
    pub fn clear_status(&mut self) -> io::Result<()> {
        execute!(self.out, MoveTo(0, STATUS_ROW), Clear(ClearType::CurrentLine))
    }

    /// Replace the status band with a message.
    pub fn status(&mut self, msg: &str) -> io::Result<()> {
        queue!(self.out, MoveTo(0, STATUS_ROW), Clear(ClearType::CurrentLine))?;
        write!(self.out, "{}", msg)?;
        self.out.flush()
    }

    /// Redraw the task region, clearing all of it first so a shrinking
    /// list leaves no stale rows behind.
    pub fn draw_tasks<'a>(
        &mut self,
        tasks: impl IntoIterator<Item = &'a Task>,
    ) -> io::Result<()> {
        for row in 0..LIST_HEIGHT {
            queue!(
                self.out,
                MoveTo(0, LIST_ROW + row),
                Clear(ClearType::CurrentLine)
            )?;
        }

        for (row, task) in (0u16..).zip(tasks) {
            queue!(self.out, MoveTo(0, LIST_ROW + row))?;
            write!(self.out, "{}", task.name)?;
        }
        self.out.flush()
    }

    /// Park the cursor in the input cell, wiping the previous echo.
    pub fn move_to_input(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(PROMPT.len() as u16, 0),
            Clear(ClearType::UntilNewLine)
        )?;
        self.out.flush()
    }
}
