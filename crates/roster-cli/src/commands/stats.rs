//! Highest and average total score.

use std::io::{BufRead, Write};

use anyhow::Result;
use roster_core::{RecordStore, RosterError};

use crate::console::Console;

pub fn execute<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &RecordStore,
) -> Result<()> {
    let out = console.out();

    let stats = match store.stats() {
        Ok(stats) => stats,
        Err(RosterError::EmptyStore) => {
            writeln!(out, "\nNo records.")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    writeln!(out, "\nStatistics:")?;
    writeln!(out, "Highest total score: {:.2}", stats.max_total_score)?;
    writeln!(out, "Average total score: {:.2}", stats.mean_total_score)?;
    Ok(())
}
