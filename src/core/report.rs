use crate::domain::model::{Register, Report, ReportFormat};
use crate::utils::error::{RegisterError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RegisterSnapshot<'a> {
    generated_at: DateTime<Utc>,
    students: Vec<StudentSnapshot<'a>>,
    courses: Vec<CourseSnapshot<'a>>,
    warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
struct StudentSnapshot<'a> {
    id: &'a str,
    name: &'a str,
    courses: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct CourseSnapshot<'a> {
    crn: &'a str,
    name: &'a str,
    students: Vec<&'a str>,
}

pub fn build_report(register: &Register, format: ReportFormat) -> Result<Report> {
    let body = match format {
        ReportFormat::Text => register.render_report(),
        ReportFormat::Json => render_json(register)?,
        ReportFormat::Csv => render_csv(register)?,
    };

    Ok(Report {
        format,
        body,
        student_count: register.students().len(),
        course_count: register.courses().len(),
        enrollment_count: register.enrollment_count(),
        warning_count: register.warnings().len(),
    })
}

fn render_json(register: &Register) -> Result<String> {
    let students = register.students();
    let courses = register.courses();

    let snapshot = RegisterSnapshot {
        generated_at: Utc::now(),
        students: students
            .iter()
            .map(|student| StudentSnapshot {
                id: student.id(),
                name: student.name(),
                courses: student
                    .course_crns()
                    .iter()
                    .filter_map(|crn| courses.get(crn).map(|c| c.name()))
                    .collect(),
            })
            .collect(),
        courses: courses
            .iter()
            .map(|course| CourseSnapshot {
                crn: course.crn(),
                name: course.name(),
                students: course
                    .student_ids()
                    .iter()
                    .filter_map(|id| students.get(id).map(|s| s.name()))
                    .collect(),
            })
            .collect(),
        warnings: register.warnings().iter().map(ToString::to_string).collect(),
    };

    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// One row per linked enrollment, in student order.
fn render_csv(register: &Register) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["student_id", "student_name", "crn", "course_name"])?;

    for student in register.students().iter() {
        for crn in student.course_crns() {
            if let Some(course) = register.courses().get(crn) {
                writer.write_record([student.id(), student.name(), course.crn(), course.name()])?;
            }
        }
    }

    let data = writer
        .into_inner()
        .map_err(|e| RegisterError::IoError(e.into_error()))?;
    String::from_utf8(data).map_err(|e| {
        RegisterError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::RegisterLoader;

    const REGISTER: &str = "1 Ada Lovelace\n2 Alan Turing\n\n\
        100 Intro to Computing\n200 Logic\n\n\
        1 100\n2 100\n2 200\n3 200\n";

    #[test]
    fn test_text_report_counts() {
        let register = RegisterLoader::load_str(REGISTER).unwrap();
        let report = build_report(&register, ReportFormat::Text).unwrap();

        assert_eq!(report.student_count, 2);
        assert_eq!(report.course_count, 2);
        assert_eq!(report.enrollment_count, 3);
        assert_eq!(report.warning_count, 1);
        assert!(report
            .body
            .contains("2 Alan Turing - 2 course(s):\n  - Intro to Computing\n  - Logic\n\n"));
    }

    #[test]
    fn test_json_report_resolves_names() {
        let register = RegisterLoader::load_str(REGISTER).unwrap();
        let report = build_report(&register, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.body).unwrap();

        assert_eq!(value["students"][0]["courses"][0], "Intro to Computing");
        assert_eq!(value["courses"][1]["students"][0], "Alan Turing");
        assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_csv_report_rows() {
        let register = RegisterLoader::load_str(REGISTER).unwrap();
        let report = build_report(&register, ReportFormat::Csv).unwrap();
        let lines: Vec<&str> = report.body.lines().collect();

        assert_eq!(
            lines,
            vec![
                "student_id,student_name,crn,course_name",
                "1,Ada Lovelace,100,Intro to Computing",
                "2,Alan Turing,100,Intro to Computing",
                "2,Alan Turing,200,Logic",
            ]
        );
    }
}
