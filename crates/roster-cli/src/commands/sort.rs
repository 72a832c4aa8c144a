//! Sort the store in place.

use std::io::{BufRead, Write};

use anyhow::Result;
use roster_core::{RecordStore, SortKey};

use crate::console::Console;
use crate::menu::INVALID_CHOICE;

const SORT_MENU: &str = "\nSort by:\n1. ID\n2. Name\n3. Total score\nChoice: ";

pub fn execute<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut RecordStore,
) -> Result<()> {
    let Some(selection) = console.prompt_token(SORT_MENU)? else {
        return Ok(());
    };

    match selection.parse::<SortKey>() {
        Ok(key) => {
            store.sort_by(key);
            writeln!(console.out(), "Records sorted.")?;
        }
        Err(e) => {
            tracing::debug!(error = %e, "bad sort key");
            writeln!(console.out(), "{INVALID_CHOICE}")?;
        }
    }

    Ok(())
}
