//! Tests for name ordering

use roster::sort::{is_sorted_by_name, sort_by_name};

use crate::common::{collect_script, names, student};

#[test]
fn sorts_collected_records_case_insensitively() {
    let (mut students, _) =
        collect_script(&["bob", "1 St", "3.0", "Alice", "2 St", "4.0", "done"]);
    sort_by_name(&mut students);
    assert_eq!(names(&students), ["Alice", "bob"]);
    assert_eq!(students[0].score().value(), 4.0);
    assert_eq!(students[1].score().value(), 3.0);
}

#[test]
fn sorting_twice_changes_nothing() {
    let mut students = vec![
        student("carol", "c", 1.0),
        student("Bob", "b", 2.0),
        student("alice", "a", 3.0),
    ];
    sort_by_name(&mut students);
    let once = students.clone();
    sort_by_name(&mut students);
    assert_eq!(students, once);
    assert!(is_sorted_by_name(&students));
}

#[test]
fn duplicate_names_keep_entry_order() {
    let mut students = vec![
        student("Lee", "first", 1.0),
        student("adams", "x", 2.0),
        student("lee", "second", 3.0),
    ];
    sort_by_name(&mut students);
    let addresses: Vec<_> = students.iter().map(|s| s.address()).collect();
    assert_eq!(addresses, ["x", "first", "second"]);
}

#[test]
fn non_ascii_names_compare_lowercased() {
    let mut students = vec![student("Émile", "", 1.0), student("édith", "", 1.0)];
    sort_by_name(&mut students);
    assert_eq!(names(&students), ["édith", "Émile"]);
}
