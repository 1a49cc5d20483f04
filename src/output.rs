//! Output formatting for command-line results

use std::io::{self, Write};

/// Write one result per line, or all results as a single JSON array.
pub fn write_results<W: Write, S: AsRef<str>>(out: &mut W, results: &[S], json: bool) -> io::Result<()> {
    if json {
        let values: Vec<&str> = results.iter().map(|r| r.as_ref()).collect();
        serde_json::to_writer(&mut *out, &values)?;
        writeln!(out)?;
        return Ok(());
    }

    for result in results {
        writeln!(out, "{}", result.as_ref())?;
    }
    Ok(())
}
