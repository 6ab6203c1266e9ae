//! tsk - minimal interactive to-do list manager for the terminal

use anyhow::Result;
use clap::Parser;

use tsk::tui;

/// Minimal interactive terminal to-do list manager.
///
/// Tasks persist in `$HOME/.tasks`. Commands are read one per line
/// from standard input:
///
///   add <name>   add a pending task
///   com <name>   mark a pending task as done
///   todo         show the pending list
///   done         show the done list
///
/// End of input (Ctrl-D) exits.
#[derive(Parser)]
#[command(name = "tsk", version, verbatim_doc_comment)]
struct Cli {}

fn main() -> Result<()> {
    if std::env::var("TSK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("tsk=debug")
            .init();
    }

    let _cli = Cli::parse();

    tui::run()
}
