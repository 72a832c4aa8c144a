//! Display every record.

use std::io::{BufRead, Write};

use anyhow::Result;
use roster_core::RecordStore;

use crate::console::Console;
use crate::render::write_table;

pub fn execute<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &RecordStore,
) -> Result<()> {
    let out = console.out();

    if store.is_empty() {
        writeln!(out, "\nNo records.")?;
        return Ok(());
    }

    writeln!(out, "\nStudent list:")?;
    write_table(out, store.list_all())?;
    Ok(())
}
