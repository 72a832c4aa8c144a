//! Search by id or by name substring.

use std::io::{BufRead, Write};

use anyhow::Result;
use roster_core::{RecordStore, SearchMode};

use crate::console::Console;
use crate::menu::INVALID_CHOICE;
use crate::render::write_table;

const SEARCH_MENU: &str = "\nSearch by:\n1. ID\n2. Name\nChoice: ";

pub fn execute<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &RecordStore,
) -> Result<()> {
    let Some(selection) = console.prompt_token(SEARCH_MENU)? else {
        return Ok(());
    };
    let mode = match selection.parse::<SearchMode>() {
        Ok(mode) => mode,
        Err(e) => {
            tracing::debug!(error = %e, "bad search mode");
            writeln!(console.out(), "{INVALID_CHOICE}")?;
            return Ok(());
        }
    };

    let Some(query) = console.prompt("Search query: ")? else {
        return Ok(());
    };

    let hits = store.search(mode, &query);
    let out = console.out();
    if hits.is_empty() {
        writeln!(out, "No results found.")?;
        return Ok(());
    }

    writeln!(out, "\nSearch results:")?;
    write_table(out, hits)?;
    Ok(())
}
