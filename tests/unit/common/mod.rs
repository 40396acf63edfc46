//! Shared test fixtures and helpers

use roster::collector;
use roster::models::{Score, Student};

/// Build a valid student, panicking on bad fixture data
pub fn student(name: &str, address: &str, gpa: f64) -> Student {
    Student::new(name, address, Score::new(gpa).expect("fixture GPA in range"))
        .expect("fixture name not blank")
}

/// Feed `lines` to the collector as if typed, returning records and console text
pub fn collect_script(lines: &[&str]) -> (Vec<Student>, String) {
    let mut input = lines.join("\n");
    input.push('\n');
    let mut console = Vec::new();
    let students = collector::collect(input.as_bytes(), &mut console).expect("collect failed");
    (students, String::from_utf8(console).expect("console output is UTF-8"))
}

/// Names in sequence order
pub fn names(students: &[Student]) -> Vec<&str> {
    students.iter().map(Student::name).collect()
}
