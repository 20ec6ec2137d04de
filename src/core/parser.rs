//! Line parsers for the three register sections.
//!
//! Each parser takes one raw line (a trailing newline is fine) and never
//! looks at anything but that line.

use crate::utils::error::{RegisterError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentEntry {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEntry {
    pub crn: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentEntry {
    pub id: String,
    pub crn: String,
}

/// `<id> <name>`: the name is everything after the first run of
/// whitespace, with its internal spacing kept as is.
pub fn parse_student_line(line: &str) -> StudentEntry {
    let trimmed = line.trim();
    let (id, name) = match trimmed.split_once(char::is_whitespace) {
        Some((id, rest)) => (id, rest.trim()),
        None => (trimmed, ""),
    };

    StudentEntry {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// `<crn> <word>...`: name words are rejoined with single spaces.
pub fn parse_course_line(line: &str) -> CourseEntry {
    let mut tokens = line.split_whitespace();
    let crn = tokens.next().unwrap_or_default().to_string();
    let name = tokens.collect::<Vec<_>>().join(" ");

    CourseEntry { crn, name }
}

/// `<id> <crn>`. More than two tokens is a [`RegisterError::FormatError`];
/// missing tokens come back as empty strings.
pub fn parse_enrollment_line(line: &str) -> Result<EnrollmentEntry> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() > 2 {
        return Err(RegisterError::FormatError {
            expected: 2,
            found: tokens.len(),
            line: line.trim_end_matches(['\r', '\n']).to_string(),
        });
    }

    let token = |i: usize| tokens.get(i).copied().unwrap_or_default().to_string();
    Ok(EnrollmentEntry {
        id: token(0),
        crn: token(1),
    })
}
