//! Collect the roster, tally it, and write the report.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info};

use gradebook_core::collector::Collector;
use gradebook_core::statistics::Tally;
use gradebook_report::text::save_report;

/// How a run ended, short of an input error.
#[derive(Debug)]
pub enum Outcome {
    /// The report was written.
    Written,
    /// The count was zero or negative; no file was touched.
    NoStudents,
    /// The report could not be written. The operator has been told.
    WriteFailed,
}

pub fn execute(output: &Path) -> Result<Outcome> {
    let roster = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut collector = Collector::new(stdin.lock(), stdout.lock());
        collector
            .collect_roster()
            .context("failed to collect student grades")?
    };

    let Some(roster) = roster else {
        println!("No students to process. Exiting.");
        return Ok(Outcome::NoStudents);
    };

    let tally = Tally::from_roster(&roster);
    info!(
        students = roster.len(),
        passed = tally.passed,
        failed = tally.failed,
        "roster tallied"
    );

    if let Err(e) = save_report(output, &roster, tally.passed) {
        error!(path = %e.path().display(), "report not written: {e}");
        println!("Failed to write report: {e}");
        return Ok(Outcome::WriteFailed);
    }

    println!("\nReport generated: {}", output.display());
    print_summary(&tally);
    Ok(Outcome::Written)
}

fn print_summary(tally: &Tally) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Students", "Passed", "Failed"]);
    table.add_row(vec![
        Cell::new(tally.total()),
        Cell::new(tally.passed),
        Cell::new(tally.failed),
    ]);

    eprintln!("\n{table}");
}
