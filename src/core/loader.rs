use crate::core::parser::{parse_course_line, parse_enrollment_line, parse_student_line};
use crate::domain::model::{Course, EnrollmentWarning, Register, Student};
use crate::utils::error::{RegisterError, Result};
use std::io::BufRead;

/// Sections of a register file, in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Students,
    Courses,
    Enrollments,
}

impl Section {
    pub const COUNT: usize = 3;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Section::Students),
            1 => Some(Section::Courses),
            2 => Some(Section::Enrollments),
            _ => None,
        }
    }
}

/// Blank-line counter driving the section state machine.
#[derive(Debug, Clone, Default)]
pub struct SectionCursor {
    index: usize,
}

impl SectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Called on every blank line. One blank line past the enrollment
    /// section is tolerated, a second one is not.
    pub fn advance(&mut self) -> Result<()> {
        self.index += 1;
        if self.index > Section::COUNT {
            return Err(RegisterError::SectionOverflow {
                expected: Section::COUNT,
                found: self.index + 1,
            });
        }
        Ok(())
    }

    /// Section that owns the next content line.
    pub fn current(&self) -> Result<Section> {
        Section::from_index(self.index).ok_or(RegisterError::SectionOverflow {
            expected: Section::COUNT,
            found: self.index + 1,
        })
    }
}

/// Single pass loader turning a register file into a [`Register`].
#[derive(Debug, Default)]
pub struct RegisterLoader {
    register: Register,
    cursor: SectionCursor,
}

impl RegisterLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_str(content: &str) -> Result<Register> {
        Self::new().load(content.as_bytes())
    }

    /// Reads `reader` to completion. Any fatal error discards everything
    /// loaded so far.
    pub fn load<R: BufRead>(mut self, reader: R) -> Result<Register> {
        tracing::info!("Parsing register...");

        for (number, line) in reader.lines().enumerate() {
            let line = line?;

            if line.trim().is_empty() {
                self.cursor.advance()?;
                tracing::debug!(
                    "Blank line {} -> section index {}",
                    number + 1,
                    self.cursor.index()
                );
                continue;
            }

            let section = self.cursor.current()?;
            self.process(section, &line)?;
        }

        tracing::info!(
            "Loaded {} students, {} courses, {} enrollments ({} skipped)",
            self.register.students().len(),
            self.register.courses().len(),
            self.register.enrollment_count(),
            self.register.warnings().len()
        );

        Ok(self.register)
    }

    fn process(&mut self, section: Section, line: &str) -> Result<()> {
        match section {
            Section::Students => {
                self.process_student(line);
                Ok(())
            }
            Section::Courses => {
                self.process_course(line);
                Ok(())
            }
            Section::Enrollments => self.process_enrollment(line),
        }
    }

    fn process_student(&mut self, line: &str) {
        let entry = parse_student_line(line);
        if let Some(previous) = self.register.add_student(Student::new(entry.id, entry.name)) {
            tracing::debug!(
                "Student <{}> redefined, replacing '{}'",
                previous.id(),
                previous.name()
            );
        }
    }

    fn process_course(&mut self, line: &str) {
        let entry = parse_course_line(line);
        if let Some(previous) = self.register.add_course(Course::new(entry.crn, entry.name)) {
            tracing::debug!(
                "Course <{}> redefined, replacing '{}'",
                previous.crn(),
                previous.name()
            );
        }
    }

    fn process_enrollment(&mut self, line: &str) -> Result<()> {
        let entry = parse_enrollment_line(line)?;

        match self.validate_enrollment(&entry.id, &entry.crn, line) {
            Some(warning) => {
                tracing::warn!("{}", warning);
                self.register.record_warning(warning);
            }
            None => {
                self.register.link(&entry.id, &entry.crn);
            }
        }
        Ok(())
    }

    fn validate_enrollment(&self, id: &str, crn: &str, line: &str) -> Option<EnrollmentWarning> {
        let has_student = self.register.students().contains_key(id);
        let has_course = self.register.courses().contains_key(crn);
        let line = line.trim_end().to_string();

        match (has_student, has_course) {
            (true, true) => None,
            (false, false) => Some(EnrollmentWarning::UnknownStudentAndCourse {
                id: id.to_string(),
                crn: crn.to_string(),
                line,
            }),
            (false, true) => Some(EnrollmentWarning::UnknownStudent {
                id: id.to_string(),
                line,
            }),
            (true, false) => Some(EnrollmentWarning::UnknownCourse {
                crn: crn.to_string(),
                line,
            }),
        }
    }
}
