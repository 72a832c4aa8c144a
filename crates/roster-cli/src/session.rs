//! The interactive menu loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use roster_core::RecordStore;

use crate::commands;
use crate::console::Console;
use crate::menu::{MenuChoice, CHOICE_PROMPT, INVALID_CHOICE, MENU};

/// Run the menu loop until the user picks `0` or input runs out.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut RecordStore,
) -> Result<()> {
    tracing::info!(policy = ?store.policy(), "session started");

    loop {
        write!(console.out(), "{MENU}")?;
        let Some(selection) = console.prompt_token(CHOICE_PROMPT)? else {
            tracing::info!("input closed");
            writeln!(console.out())?;
            break;
        };

        let choice = match selection.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                tracing::debug!(error = %e, "bad menu selection");
                writeln!(console.out(), "{INVALID_CHOICE}")?;
                continue;
            }
        };

        match choice {
            MenuChoice::AddRecord => commands::add::execute(console, store)?,
            MenuChoice::DisplayAll => commands::display::execute(console, store)?,
            MenuChoice::Search => commands::search::execute(console, store)?,
            MenuChoice::Sort => commands::sort::execute(console, store)?,
            MenuChoice::Statistics => commands::stats::execute(console, store)?,
            MenuChoice::Exit => break,
        }
    }

    writeln!(console.out(), "Goodbye!")?;
    console.out().flush()?;
    tracing::info!(records = store.len(), "session ended");
    Ok(())
}
