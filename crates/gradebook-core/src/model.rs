//! Core data model types for gradebook.
//!
//! A [`Roster`] owns the [`StudentRecord`]s collected during one run, in the
//! order they were entered. That order is also the report order.

use std::fmt;
use std::slice;

/// One student's name and grade.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    name: String,
    grade: f64,
}

impl StudentRecord {
    /// Create a record. The name is stored as given, empty names included.
    pub fn new(name: impl Into<String>, grade: f64) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, format_grade(self.grade))
    }
}

/// Format a grade with exactly one decimal place.
///
/// Rounds half up on the shortest decimal form of the value: `88.25` prints
/// as `88.3` and `0.15` as `0.2`, where `{:.1}` would give `88.2` and `0.1`.
pub fn format_grade(grade: f64) -> String {
    if !grade.is_finite() {
        return format!("{grade:.1}");
    }

    // `Display` for f64 is the shortest round-trip form and never uses an
    // exponent, so this is always `digits[.digits]`.
    let shortest = grade.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let mut frac = frac_part.bytes();

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    digits.push(frac.next().map_or(0, |b| b - b'0'));

    if frac.next().is_some_and(|b| b >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let (whole, tenths) = digits.split_at(digits.len() - 1);
    let mut out = String::with_capacity(digits.len() + 2);
    if grade.is_sign_negative() {
        out.push('-');
    }
    out.extend(whole.iter().map(|&d| char::from(b'0' + d)));
    out.push('.');
    out.push(char::from(b'0' + tenths[0]));
    out
}

/// The ordered collection of students for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of students on the roster.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Students in entry order.
    pub fn iter(&self) -> slice::Iter<'_, StudentRecord> {
        self.students.iter()
    }

    /// Grades in entry order.
    pub fn grades(&self) -> impl Iterator<Item = f64> + '_ {
        self.students.iter().map(StudentRecord::grade)
    }

    pub(crate) fn push(&mut self, record: StudentRecord) {
        self.students.push(record);
    }
}

impl From<Vec<StudentRecord>> for Roster {
    fn from(students: Vec<StudentRecord>) -> Self {
        Self { students }
    }
}

impl FromIterator<StudentRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = StudentRecord>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StudentRecord;
    type IntoIter = slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
