//! Interactive query session
//!
//! Reads one query per line, prints the report for each, and ends with
//! [`GOODBYE_LINE`] at end of input. Lines that are not valid UTF-8 are
//! rejected here and never reach the engine; the session keeps serving.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::matcher::MatchEngine;
use crate::report::ReportFormatter;

pub const GOODBYE_LINE: &str = "say goodbye ~";

/// Serve queries from `reader` until end of input
pub fn run<R: BufRead, W: Write>(
    mut reader: R,
    mut out: W,
    engine: &MatchEngine<'_>,
    formatter: &ReportFormatter,
) -> Result<()> {
    let lang = formatter.language();
    let mut buf = Vec::with_capacity(64);

    loop {
        write!(out, "{}", lang.prompt())?;
        out.flush()?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            writeln!(out, "{}", GOODBYE_LINE)?;
            break;
        }

        let query = match std::str::from_utf8(&buf) {
            Ok(query) => query,
            Err(e) => {
                tracing::warn!("Rejected query line: {}", e);
                writeln!(out, "{}", lang.invalid_input_line())?;
                continue;
            }
        };

        let matches = engine.search(query);
        write!(out, "{}", formatter.format_results(engine.catalogue(), &matches)?)?;
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}
