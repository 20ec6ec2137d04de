use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Entities stored in a [`Roster`] are looked up by a unique string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// 學生：id 與姓名不可變，選課清單只會增加
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: String,
    name: String,
    courses: Vec<String>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            courses: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// CRNs of the enrolled courses, in enrollment order. Duplicates are kept.
    pub fn course_crns(&self) -> &[String] {
        &self.courses
    }

    pub fn add_course(&mut self, course: &Course) {
        self.courses.push(course.crn().to_string());
    }

    /// Renders the report block for this student, resolving course names
    /// through the owning roster.
    pub fn render(&self, courses: &Roster<Course>) -> String {
        let names: Vec<&str> = self
            .courses
            .iter()
            .filter_map(|crn| courses.get(crn).map(Course::name))
            .collect();

        render_block(
            &format!("{} {}", self.id, self.name),
            self.courses.len(),
            "course(s)",
            &names,
            "(No courses)",
        )
    }
}

impl Keyed for Student {
    fn key(&self) -> &str {
        &self.id
    }
}

/// 課程：以 CRN 為唯一鍵
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    crn: String,
    name: String,
    students: Vec<String>,
}

impl Course {
    pub fn new(crn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            crn: crn.into(),
            name: name.into(),
            students: Vec::new(),
        }
    }

    pub fn crn(&self) -> &str {
        &self.crn
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn student_ids(&self) -> &[String] {
        &self.students
    }

    pub fn add_student(&mut self, student: &Student) {
        self.students.push(student.id().to_string());
    }

    pub fn render(&self, students: &Roster<Student>) -> String {
        let names: Vec<&str> = self
            .students
            .iter()
            .filter_map(|id| students.get(id).map(Student::name))
            .collect();

        render_block(
            &format!("{} {}", self.crn, self.name),
            self.students.len(),
            "student(s)",
            &names,
            "(No students)",
        )
    }
}

impl Keyed for Course {
    fn key(&self) -> &str {
        &self.crn
    }
}

fn render_block(
    identity: &str,
    count: usize,
    noun: &str,
    names: &[&str],
    placeholder: &str,
) -> String {
    let mut block = format!("{} - {} {}:\n", identity, count, noun);
    if names.is_empty() {
        block.push_str("  ");
        block.push_str(placeholder);
    } else {
        let lines: Vec<String> = names.iter().map(|name| format!("  - {}", name)).collect();
        block.push_str(&lines.join("\n"));
    }
    block.push_str("\n\n");
    block
}

/// Insertion-ordered collection indexed by [`Keyed::key`].
///
/// Re-inserting an existing key replaces the entry in place, so iteration
/// order stays the order in which keys were first registered.
#[derive(Debug, Clone)]
pub struct Roster<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Roster<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replaced entry when the key was already present.
    pub fn insert(&mut self, entry: T) -> Option<T> {
        if let Some(&position) = self.index.get(entry.key()) {
            return Some(std::mem::replace(&mut self.entries[position], entry));
        }

        self.index.insert(entry.key().to_string(), self.entries.len());
        self.entries.push(entry);
        None
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&position| &self.entries[position])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        match self.index.get(key) {
            Some(&position) => self.entries.get_mut(position),
            None => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Non-fatal problem found while linking an enrollment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentWarning {
    UnknownStudentAndCourse { id: String, crn: String, line: String },
    UnknownStudent { id: String, line: String },
    UnknownCourse { crn: String, line: String },
}

impl fmt::Display for EnrollmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrollmentWarning::UnknownStudentAndCourse { id, crn, line } => write!(
                f,
                "Unknown student <{}> and course <{}> in line <{}>. Skipping...",
                id, crn, line
            ),
            EnrollmentWarning::UnknownStudent { id, line } => {
                write!(f, "Unknown student <{}> in line <{}>. Skipping...", id, line)
            }
            EnrollmentWarning::UnknownCourse { crn, line } => {
                write!(f, "Unknown course <{}> in line <{}>. Skipping...", crn, line)
            }
        }
    }
}

/// Owns every student and course read from a register file.
#[derive(Debug, Clone, Default)]
pub struct Register {
    students: Roster<Student>,
    courses: Roster<Course>,
    warnings: Vec<EnrollmentWarning>,
    enrollments: usize,
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &Roster<Student> {
        &self.students
    }

    pub fn courses(&self) -> &Roster<Course> {
        &self.courses
    }

    pub fn warnings(&self) -> &[EnrollmentWarning] {
        &self.warnings
    }

    /// Number of enrollments that were linked successfully.
    pub fn enrollment_count(&self) -> usize {
        self.enrollments
    }

    pub fn add_student(&mut self, student: Student) -> Option<Student> {
        self.students.insert(student)
    }

    pub fn add_course(&mut self, course: Course) -> Option<Course> {
        self.courses.insert(course)
    }

    pub fn record_warning(&mut self, warning: EnrollmentWarning) {
        self.warnings.push(warning);
    }

    /// Links both sides of an enrollment. Returns `false` without touching
    /// either entity when one of the keys is unknown.
    pub fn link(&mut self, id: &str, crn: &str) -> bool {
        let (Some(student), Some(course)) = (self.students.get_mut(id), self.courses.get_mut(crn))
        else {
            return false;
        };

        student.add_course(course);
        course.add_student(student);
        self.enrollments += 1;
        true
    }

    pub fn render_report(&self) -> String {
        let mut report = String::from("\n################ Students ################\n");
        for student in self.students.iter() {
            report.push_str(&student.render(&self.courses));
        }

        report.push_str("\n################ Courses ################\n");
        for course in self.courses.iter() {
            report.push_str(&course.render(&self.students));
        }
        report
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub const ALL: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(format!(
                "Unsupported report format '{}'. Valid formats: {}",
                other,
                Self::ALL.join(", ")
            )),
        }
    }
}

/// Rendered report plus the counts the engine logs.
#[derive(Debug, Clone)]
pub struct Report {
    pub format: ReportFormat,
    pub body: String,
    pub student_count: usize,
    pub course_count: usize,
    pub enrollment_count: usize,
    pub warning_count: usize,
}
