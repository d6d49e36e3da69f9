//! gradebook CLI: collect student grades and write a pass/fail report.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gradebook_report::text::DEFAULT_REPORT_FILE;

mod run;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Collect student grades and write a pass/fail report",
    long_about = "Prompts for a number of students, then a name and grade for each. \
                  Grades of 75.0 or more pass. The report is written as plain text, \
                  replacing any previous report at the same path."
)]
struct Cli {
    /// Report file to write
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gradebook=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run::execute(&cli.output) {
        Ok(run::Outcome::Written) | Ok(run::Outcome::NoStudents) => {}
        Ok(run::Outcome::WriteFailed) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
