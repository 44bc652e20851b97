//! First N lines of a text file, numbered.
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::Error;

pub fn head<W: Write>(src: &Path, lines: usize, out: &mut W) -> Result<(), Error> {
    writeln!(out, "file head: {:?}", src)?;
    writeln!(out, "showing first {} lines", lines)?;
    writeln!(out, "{}", "=".repeat(60))?;

    let handle = File::open(src)?;
    let reader = BufReader::new(handle);
    for (i, line) in reader.lines().take(lines).enumerate() {
        writeln!(out, "{}: {}", i + 1, line?.trim())?;
    }

    Ok(())
}
