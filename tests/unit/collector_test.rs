//! Tests for the interactive collector
//!
//! The collector is driven with scripted input, so no terminal is needed.

use roster::collector::{Collector, SCORE_PROMPT, State};
use test_case::test_case;

use crate::common::{collect_script, names};

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn scenario_two_students_then_done() {
    let (students, _) = collect_script(&["bob", "1 St", "3.0", "Alice", "2 St", "4.0", "done"]);
    assert_eq!(names(&students), ["bob", "Alice"]);
    assert_eq!(students[1].score().value(), 4.0);
}

#[test]
fn scenario_rejected_scores_then_valid() {
    let (students, console) = collect_script(&["bob", "1 St", "abc", "5.5", "3.2", "done"]);
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].score().value(), 3.2);
    assert_eq!(console.matches("Invalid input").count(), 1);
    assert_eq!(console.matches("GPA must be between 0.0 and 4.0.").count(), 1);
}

#[test]
fn scenario_done_first() {
    let (students, console) = collect_script(&["done"]);
    assert!(students.is_empty());
    assert!(!console.contains(SCORE_PROMPT));
}

// =============================================================================
// Score Validation Tests
// =============================================================================

#[test_case("0.0", 0.0 ; "lower bound")]
#[test_case("4.0", 4.0 ; "upper bound")]
#[test_case("4", 4.0 ; "integer")]
#[test_case(" 3.5 ", 3.5 ; "surrounded by spaces")]
#[test_case(".5", 0.5 ; "leading dot")]
fn accepts_valid_score_on_first_try(input: &str, expected: f64) {
    let (students, console) = collect_script(&["bob", "1 St", input, "done"]);
    assert_eq!(students[0].score().value(), expected);
    assert_eq!(console.matches(SCORE_PROMPT).count(), 1);
}

#[test_case("abc", "Invalid input" ; "letters")]
#[test_case("", "Invalid input" ; "empty")]
#[test_case("3.5 extra", "Invalid input" ; "trailing text")]
#[test_case("4.0001", "GPA must be between" ; "just above range")]
#[test_case("-0.1", "GPA must be between" ; "negative")]
#[test_case("NaN", "GPA must be between" ; "not a number")]
#[test_case("inf", "GPA must be between" ; "infinity")]
fn rejects_invalid_score(input: &str, message: &str) {
    let (students, console) = collect_script(&["bob", "1 St", input, "2.0", "done"]);
    assert_eq!(students[0].score().value(), 2.0);
    assert!(console.contains(message));
    assert_eq!(console.matches(SCORE_PROMPT).count(), 2);
}

// =============================================================================
// Sentinel Tests
// =============================================================================

#[test_case("done" ; "lowercase")]
#[test_case("DONE" ; "uppercase")]
#[test_case(" Done\t" ; "padded")]
fn sentinel_variants_end_collection(sentinel: &str) {
    let (students, _) = collect_script(&["bob", "1 St", "1.0", sentinel, "never", "read", "2.0"]);
    assert_eq!(names(&students), ["bob"]);
}

#[test]
fn sentinel_inside_name_is_a_name() {
    let (students, _) = collect_script(&["done deal", "1 St", "1.0", "done"]);
    assert_eq!(names(&students), ["done deal"]);
}

#[test]
fn sentinel_is_not_checked_for_score() {
    let (students, console) = collect_script(&["bob", "1 St", "done", "1.0", "done"]);
    assert_eq!(students.len(), 1);
    assert!(console.contains("Invalid input"));
}

// =============================================================================
// State Machine Tests
// =============================================================================

#[test]
fn collector_starts_awaiting_name() {
    let collector = Collector::new("".as_bytes(), Vec::new());
    assert_eq!(collector.state(), &State::AwaitName);
    assert!(!collector.is_done());
}

#[test]
fn empty_input_finishes_immediately() {
    let mut collector = Collector::new("".as_bytes(), Vec::new());
    let mut students = Vec::new();
    assert_eq!(collector.collect_into(&mut students).unwrap(), 0);
    assert!(collector.is_done());
}

#[test]
fn collect_into_appends_to_existing_records() {
    let mut students = vec![crate::common::student("zed", "9 St", 1.0)];
    let mut collector = Collector::new("amy\n3 St\n2.0\n".as_bytes(), Vec::new());
    assert_eq!(collector.collect_into(&mut students).unwrap(), 1);
    assert_eq!(names(&students), ["zed", "amy"]);
}
