//! Interactive roster collection.
//!
//! The collector reads one line per answer from any [`BufRead`] source and
//! writes its prompts to any [`Write`] sink, so the same code runs against a
//! terminal or against in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{InputError, MalformedGrade};
use crate::model::{Roster, StudentRecord};

/// Parse a grade line. Surrounding whitespace is ignored and only finite
/// numbers are accepted.
pub fn parse_grade(line: &str) -> Result<f64, MalformedGrade> {
    let trimmed = line.trim();
    match trimmed.parse::<f64>() {
        // NaN and infinities parse but are not grades; re-prompt for them too.
        Ok(grade) if grade.is_finite() => Ok(grade),
        _ => Err(MalformedGrade {
            input: trimmed.to_string(),
        }),
    }
}

/// Prompts for and reads a roster.
pub struct Collector<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Ask for the number of students.
    ///
    /// Any whole number is returned as-is, including zero and negatives.
    pub fn read_count(&mut self) -> Result<i64, InputError> {
        self.prompt(format_args!("Enter number of students: "))?;
        let line = self.next_line("the student count")?;
        line.parse::<i64>()
            .map_err(|_| InputError::InvalidCount {
                input: line.to_string(),
            })
    }

    /// Ask for one student's name and grade. `index` is 1-based.
    ///
    /// Malformed grades are re-prompted until a valid one arrives or the
    /// input ends.
    pub fn read_student(&mut self, index: usize) -> Result<StudentRecord, InputError> {
        self.prompt(format_args!("\nEnter name of student {index}: "))?;
        let name = self.next_line("a student name")?.to_string();

        self.prompt(format_args!("Enter grade of {name}: "))?;
        loop {
            let line = self.next_line("a grade")?;
            match parse_grade(line) {
                Ok(grade) => return Ok(StudentRecord::new(name, grade)),
                Err(e) => {
                    debug!(student = index, "{e}, re-prompting");
                    self.prompt(format_args!("Invalid grade. Re-enter: "))?;
                }
            }
        }
    }

    /// Read the count and then every student.
    ///
    /// Returns `Ok(None)` when the count is zero or negative.
    pub fn collect_roster(&mut self) -> Result<Option<Roster>, InputError> {
        let count = self.read_count()?;
        if count <= 0 {
            debug!(count, "nothing to collect");
            return Ok(None);
        }
        let count = usize::try_from(count).map_err(|_| InputError::InvalidCount {
            input: count.to_string(),
        })?;

        let mut roster = Roster::new();
        for index in 1..=count {
            let record = self.read_student(index)?;
            debug!(student = index, grade = record.grade(), "student recorded");
            roster.push(record);
        }
        Ok(Some(roster))
    }

    /// Hand back the prompt sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: std::fmt::Arguments<'_>) -> Result<(), InputError> {
        self.output.write_fmt(text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read the next line, trimmed. End of input is an error.
    fn next_line(&mut self, expected: &str) -> Result<&str, InputError> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(InputError::UnexpectedEof {
                expected: expected.to_string(),
            });
        }
        Ok(self.line.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collector(input: &str) -> Collector<Cursor<Vec<u8>>, Vec<u8>> {
        Collector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn prompts(c: Collector<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.into_output()).unwrap()
    }

    #[test]
    fn parse_grade_accepts_numbers() {
        assert_eq!(parse_grade("90"), Ok(90.0));
        assert_eq!(parse_grade("  74.9 \r\n"), Ok(74.9));
        assert_eq!(parse_grade("-5"), Ok(-5.0));
        assert_eq!(parse_grade("1e2"), Ok(100.0));
    }

    #[test]
    fn parse_grade_rejects_garbage_and_non_finite() {
        for bad in ["abc", "", "7 5", "NaN", "inf", "-infinity", "80%"] {
            assert!(parse_grade(bad).is_err(), "{bad:?} should be rejected");
        }
        assert_eq!(
            parse_grade(" abc ").unwrap_err().input,
            "abc",
            "input is reported trimmed"
        );
    }

    #[test]
    fn collects_roster_in_order() {
        let mut c = collector("2\n  Alice \n80\nBob\n74.9\n");
        let roster = c.collect_roster().unwrap().unwrap();

        let got: Vec<(&str, f64)> = roster.iter().map(|s| (s.name(), s.grade())).collect();
        assert_eq!(got, vec![("Alice", 80.0), ("Bob", 74.9)]);

        let out = prompts(c);
        assert!(out.starts_with("Enter number of students: "));
        assert!(out.contains("\nEnter name of student 1: "));
        assert!(out.contains("Enter grade of Alice: "));
        assert!(out.contains("\nEnter name of student 2: "));
        assert!(out.contains("Enter grade of Bob: "));
        assert!(!out.contains("Invalid grade"));
    }

    #[test]
    fn malformed_grade_reprompts_once() {
        let mut c = collector("1\nCarol\nabc\n90\n");
        let roster = c.collect_roster().unwrap().unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.iter().next().unwrap().grade(), 90.0);
        assert_eq!(prompts(c).matches("Invalid grade. Re-enter: ").count(), 1);
    }

    #[test]
    fn retries_are_unbounded() {
        let input = format!("1\nDan\n{}88\n", "x\n".repeat(100));
        let mut c = collector(&input);
        let roster = c.collect_roster().unwrap().unwrap();

        assert_eq!(roster.iter().next().unwrap().grade(), 88.0);
        assert_eq!(prompts(c).matches("Invalid grade").count(), 100);
    }

    #[test]
    fn empty_name_is_kept() {
        let mut c = collector("1\n   \n60\n");
        let roster = c.collect_roster().unwrap().unwrap();
        assert_eq!(roster.iter().next().unwrap().name(), "");
    }

    #[test]
    fn zero_or_negative_count_collects_nothing() {
        for input in ["0\n", "-3\n", " -1 \n"] {
            let mut c = collector(input);
            assert!(c.collect_roster().unwrap().is_none(), "input {input:?}");
            assert_eq!(prompts(c), "Enter number of students: ");
        }
    }

    #[test]
    fn count_accepts_plus_sign_and_whitespace() {
        let mut c = collector(" +2 \n");
        assert_eq!(c.read_count().unwrap(), 2);
    }

    #[test]
    fn non_integer_count_is_an_error() {
        for input in ["abc\n", "2.5\n", "\n"] {
            let mut c = collector(input);
            let err = c.collect_roster().unwrap_err();
            assert!(
                matches!(err, InputError::InvalidCount { .. }),
                "input {input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn eof_before_count() {
        let mut c = collector("");
        assert!(matches!(
            c.collect_roster(),
            Err(InputError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn eof_mid_roster() {
        let mut c = collector("2\nAlice\n80\n");
        match c.collect_roster() {
            Err(InputError::UnexpectedEof { expected }) => assert_eq!(expected, "a student name"),
            other => panic!("expected EOF error, got {other:?}"),
        }
    }

    #[test]
    fn eof_during_grade_retry() {
        let mut c = collector("1\nEve\nnope\n");
        match c.collect_roster() {
            Err(InputError::UnexpectedEof { expected }) => assert_eq!(expected, "a grade"),
            other => panic!("expected EOF error, got {other:?}"),
        }
    }

    #[test]
    fn last_line_without_newline() {
        let mut c = collector("1\nFay\n77");
        let roster = c.collect_roster().unwrap().unwrap();
        assert_eq!(roster.iter().next().unwrap().grade(), 77.0);
    }
}
