//! Interactive command protocol parser
//!
//! One command per input line: a verb, then the rest of the line as a
//! free-text argument. `todo` and `done` take no argument and ignore
//! any text after the verb.

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <name>` - append a pending task
    Add(String),
    /// `com <name>` - mark a pending task as done
    Complete(String),
    /// `todo` - display the pending list
    ShowPending,
    /// `done` - display the done list
    ShowDone,
    /// Anything else
    Invalid,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "add" => Self::Add(arg.to_string()),
            "com" => Self::Complete(arg.to_string()),
            "todo" => Self::ShowPending,
            "done" => Self::ShowDone,
            _ => Self::Invalid,
        }
    }
}
