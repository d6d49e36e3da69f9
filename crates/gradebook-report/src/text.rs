//! Plain-text grades report.
//!
//! Layout, one item per line:
//!
//! ```text
//! Student Grades:
//! <name> - <grade to one decimal>
//! ...
//!
//! Passed: <passed>
//! Failed: <failed>
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use gradebook_core::model::Roster;
use gradebook_core::statistics::Tally;

use crate::error::ReportError;

/// File name used when no output path is given.
pub const DEFAULT_REPORT_FILE: &str = "GradesReport.txt";

/// Platform-native line terminator.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Stream the report for `roster` into `writer`.
pub fn write_report<W: Write>(writer: &mut W, roster: &Roster, passed: usize) -> io::Result<()> {
    let tally = Tally::new(roster.len(), passed);

    write!(writer, "Student Grades:{LINE_ENDING}")?;
    for student in roster {
        write!(writer, "{student}{LINE_ENDING}")?;
    }
    write!(writer, "{LINE_ENDING}")?;
    write!(writer, "Passed: {}{LINE_ENDING}", tally.passed)?;
    write!(writer, "Failed: {}{LINE_ENDING}", tally.failed)?;
    Ok(())
}

/// Write the report to `path`, replacing any existing file.
///
/// Not transactional: if a write fails partway the file is left incomplete.
/// The file handle is closed on every path.
pub fn save_report(path: &Path, roster: &Roster, passed: usize) -> Result<(), ReportError> {
    debug!(path = %path.display(), students = roster.len(), "writing report");

    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    write_report(&mut writer, roster, passed)
        .and_then(|()| writer.flush())
        .map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), "report written");
    Ok(())
}
