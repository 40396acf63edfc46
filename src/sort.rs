//! Ordering of collected records

use crate::models::Student;

/// Sort records ascending by name, ignoring case
///
/// The sort is stable: records whose names differ only in case keep their
/// insertion order.
pub fn sort_by_name(students: &mut [Student]) {
    students.sort_by_cached_key(Student::sort_key);
}

/// Whether records are already in name order
#[must_use]
pub fn is_sorted_by_name(students: &[Student]) -> bool {
    students.is_sorted_by_key(Student::sort_key)
}
