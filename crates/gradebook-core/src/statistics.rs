//! Pass/fail tally against the fixed pass threshold.

use crate::model::Roster;

/// Grades at or above this value pass.
pub const PASS_THRESHOLD: f64 = 75.0;

/// Whether a single grade passes. The threshold is inclusive.
pub fn is_passing(grade: f64) -> bool {
    grade >= PASS_THRESHOLD
}

/// Count the passing grades in a single pass.
pub fn count_passed<I>(grades: I) -> usize
where
    I: IntoIterator<Item = f64>,
{
    grades.into_iter().filter(|&g| is_passing(g)).count()
}

/// Passed and failed counts for one roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    /// Build a tally from the roster size and the passed count.
    ///
    /// `failed` is always `total - passed`; it is never counted separately.
    pub fn new(total: usize, passed: usize) -> Self {
        debug_assert!(passed <= total, "passed {passed} exceeds total {total}");
        Self {
            passed,
            failed: total.saturating_sub(passed),
        }
    }

    pub fn from_roster(roster: &Roster) -> Self {
        Self::new(roster.len(), count_passed(roster.grades()))
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}
