use course_register::{EnrollmentWarning, RegisterError, RegisterLoader};
use std::io::BufReader;

#[test]
fn test_end_to_end_example() {
    let register =
        RegisterLoader::load_str("1 Ada Lovelace\n\n100 Intro to Computing\n\n1 100\n").unwrap();
    let report = register.render_report();

    assert!(report.contains("1 Ada Lovelace - 1 course(s):\n  - Intro to Computing\n"));
    assert!(report.contains("100 Intro to Computing - 1 student(s):\n  - Ada Lovelace\n"));
}

#[test]
fn test_links_are_symmetric() {
    let register = RegisterLoader::load_str(
        "1 Ada\n2 Alan\n3 Grace\n\n100 Intro\n200 Logic\n\n1 100\n2 200\n3 100\n1 200\n9 100\n",
    )
    .unwrap();

    for student in register.students().iter() {
        for crn in student.course_crns() {
            let course = register.courses().get(crn).unwrap();
            let in_course = course.student_ids().iter().filter(|id| *id == student.id()).count();
            let in_student = student.course_crns().iter().filter(|c| *c == crn).count();
            assert_eq!(in_course, in_student);
        }
    }
    assert_eq!(register.enrollment_count(), 4);
}

#[test]
fn test_duplicate_enrollment_renders_twice() {
    let register = RegisterLoader::load_str("1 Ada\n\n100 Intro\n\n1 100\n1 100\n").unwrap();

    let ada = register.students().get("1").unwrap().render(register.courses());
    assert_eq!(ada, "1 Ada - 2 course(s):\n  - Intro\n  - Intro\n\n");
    let intro = register.courses().get("100").unwrap().render(register.students());
    assert_eq!(intro, "100 Intro - 2 student(s):\n  - Ada\n  - Ada\n\n");
}

#[test]
fn test_duplicate_course_crn_overwrites_silently() {
    // 目前行為：重複的 CRN 直接覆蓋
    let register =
        RegisterLoader::load_str("1 Ada\n\n100 Intro\n200 Logic\n100 Compilers\n\n1 100\n")
            .unwrap();

    let names: Vec<&str> = register.courses().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Compilers", "Logic"]);
    assert!(register.warnings().is_empty());
}

#[test]
fn test_missing_crn_token_warns_about_course() {
    let register = RegisterLoader::load_str("1 Ada\n\n100 Intro\n\n1\n").unwrap();

    assert_eq!(
        register.warnings(),
        &[EnrollmentWarning::UnknownCourse {
            crn: String::new(),
            line: "1".to_string()
        }]
    );
}

#[test]
fn test_load_from_reader() {
    let input = "1 Ada\n\n100 Intro\n\n1 100\n";
    let register = RegisterLoader::new()
        .load(BufReader::new(input.as_bytes()))
        .unwrap();
    assert_eq!(register.enrollment_count(), 1);
}

#[test]
fn test_empty_register() {
    let register = RegisterLoader::load_str("").unwrap();
    assert!(register.students().is_empty());
    assert_eq!(
        register.render_report(),
        "\n################ Students ################\n\
         \n################ Courses ################\n"
    );
}

#[test]
fn test_overflow_reports_section_count() {
    let err = RegisterLoader::load_str("1 Ada\n\n100 Intro\n\n1 100\n\n2 100\n").unwrap_err();
    assert_eq!(err.to_string(), "Expected <3> sections, found at least <4>.");
    assert!(matches!(err, RegisterError::SectionOverflow { .. }));
}
