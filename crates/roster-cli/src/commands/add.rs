//! Add a record.

use std::io::{BufRead, Write};

use anyhow::Result;
use roster_core::RecordStore;

use crate::console::Console;

pub fn execute<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut RecordStore,
) -> Result<()> {
    writeln!(console.out())?;
    let Some(id) = console.prompt_token("Student ID: ")? else {
        return Ok(());
    };
    let Some(name) = console.prompt("Full name: ")? else {
        return Ok(());
    };
    let Some(process_score) = console.prompt_score("Process score: ")? else {
        return Ok(());
    };
    let Some(final_score) = console.prompt_score("Final score: ")? else {
        return Ok(());
    };

    match store.insert(id, name, process_score, final_score) {
        Ok(_) => writeln!(console.out(), "Record added.")?,
        Err(e) => writeln!(console.out(), "Could not add record: {e}.")?,
    }

    Ok(())
}
