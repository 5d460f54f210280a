use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

mod args;
mod error;
mod filter;
mod input;
mod logging;
mod model;
mod output;

use crate::{
    args::Args,
    error::ScanError,
    filter::{KEYWORD, MAX_MATCHES, ScanSummary},
    output::{ReportWriter, write_error},
};

#[derive(Debug, PartialEq, Eq)]
enum RunOutcome {
    MissingInput,
    Completed(ScanSummary),
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.debug);

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())?;
    Ok(())
}

fn run<C: Write>(args: &Args, console: &mut C) -> Result<RunOutcome> {
    let lines = match input::read_lines(&args.file) {
        Ok(lines) => lines,
        Err(err @ ScanError::MissingInput(_)) => {
            writeln!(console, "{err}")?;
            return Ok(RunOutcome::MissingInput);
        }
        Err(err) => return Err(err).context("loading log file"),
    };

    writeln!(console, "Total lines: {}", lines.len())?;
    writeln!(console, "Last {MAX_MATCHES} Errors/Warnings with '{KEYWORD}':")?;

    let mut report = ReportWriter::create(&args.output).context("creating report file")?;
    let summary = filter::scan(&lines, |entry| report.write_entry(entry))
        .map_err(|source| write_error(&args.output, source))
        .context("writing report")?;
    report
        .finish()
        .map_err(|source| write_error(&args.output, source))
        .context("flushing report")?;

    tracing::debug!(
        scanned = summary.scanned,
        matched = summary.matched,
        malformed = summary.malformed,
        unrelated = summary.unrelated,
        output = %args.output.display(),
        "scan complete"
    );
    Ok(RunOutcome::Completed(summary))
}
