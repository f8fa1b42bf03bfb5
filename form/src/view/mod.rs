//! Renders a place record as read-only rows on a terminal.
//!
//! Each row is one `label: value` line with labels right-aligned to the
//! widest one, so the values line up in a column under the prompt.

use std::io::Write;

use place::{rows, PlaceRecord};

/// Writes one `label: value` line per row, labels padded to a common width,
/// followed by a blank line.
pub fn render<W: Write>(out: &mut W, record: &PlaceRecord) -> std::io::Result<()> {
    let rows = rows(record);
    let width = rows.iter().map(|row| row.label.len()).max().unwrap_or(0);

    for row in &rows {
        writeln!(out, "{:>width$}: {}", row.label, row.value, width = width)?;
    }
    writeln!(out)
}
