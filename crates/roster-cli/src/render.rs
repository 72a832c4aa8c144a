//! Fixed-width record table.

use std::io::{self, Write};

use roster_core::StudentRecord;

const ID_WIDTH: usize = 15;
const NAME_WIDTH: usize = 30;
const SCORE_WIDTH: usize = 10;
const RULE_WIDTH: usize = 75;

/// Column header line.
pub fn header() -> String {
    format!(
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<SCORE_WIDTH$}{:<SCORE_WIDTH$}{:<SCORE_WIDTH$}",
        "ID", "Name", "Process", "Final", "Total"
    )
}

/// One table row; scores with two decimals.
pub fn row(record: &StudentRecord) -> String {
    format!(
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<SCORE_WIDTH$.2}{:<SCORE_WIDTH$.2}{:<SCORE_WIDTH$.2}",
        record.id(),
        record.name(),
        record.process_score(),
        record.final_score(),
        record.total_score()
    )
}

/// Write the header, the separator rule, and one row per record.
pub fn write_table<'a, W, I>(out: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a StudentRecord>,
{
    writeln!(out, "{}", header())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for record in records {
        writeln!(out, "{}", row(record))?;
    }
    Ok(())
}
