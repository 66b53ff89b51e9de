use studydesk_core::{task_line, RecordValidationError, RegistryError, TaskRegistry};

#[test]
fn add_creates_incomplete_task() {
    let mut registry = TaskRegistry::new();

    let index = registry
        .add("Essay", "2024-01-01")
        .expect("valid task should be accepted");
    assert_eq!(index, 0);

    let task = registry.get(0).expect("index 0 should be stored");
    assert_eq!(task.title, "Essay");
    assert_eq!(task.deadline, "2024-01-01");
    assert!(!task.completed);
}

#[test]
fn add_rejects_empty_fields_without_mutation() {
    let mut registry = TaskRegistry::new();

    let err = registry
        .add("", "2024-01-01")
        .expect_err("empty title must be rejected");
    assert_eq!(
        err,
        RegistryError::Validation(RecordValidationError::EmptyField { field: "title" })
    );

    let err = registry
        .add("Essay", "")
        .expect_err("empty deadline must be rejected");
    assert_eq!(
        err,
        RegistryError::Validation(RecordValidationError::EmptyField { field: "deadline" })
    );

    assert!(registry.is_empty(), "failed adds must not store records");
}

#[test]
fn deadline_is_an_opaque_label() {
    let mut registry = TaskRegistry::new();

    registry
        .add("Read chapter 4", "next Tuesday-ish")
        .expect("non-date deadline labels are accepted verbatim");
    assert_eq!(registry.get(0).unwrap().deadline, "next Tuesday-ish");
}

#[test]
fn complete_sets_flag_and_nothing_else() {
    let mut registry = TaskRegistry::new();
    registry.add("Essay", "2024-01-01").unwrap();

    registry.complete(0).expect("index 0 is in range");

    let task = registry.get(0).unwrap();
    assert!(task.completed);
    assert_eq!(task.title, "Essay");
    assert_eq!(task.deadline, "2024-01-01");
}

#[test]
fn complete_is_idempotent() {
    let mut registry = TaskRegistry::new();
    registry.add("Essay", "2024-01-01").unwrap();

    registry.complete(0).unwrap();
    assert!(registry.get(0).unwrap().completed);

    registry.complete(0).expect("re-completing is a no-op");
    assert!(registry.get(0).unwrap().completed);
    assert_eq!(task_line(registry.get(0).unwrap()), "✅ Essay - 2024-01-01 (Completed)");
}

#[test]
fn complete_out_of_range_fails_without_mutation() {
    let mut registry = TaskRegistry::new();
    registry.add("Essay", "2024-01-01").unwrap();

    let err = registry.complete(1).expect_err("index 1 is past the end");
    assert_eq!(err, RegistryError::IndexOutOfRange { index: 1, len: 1 });
    assert!(
        !registry.get(0).unwrap().completed,
        "failed complete must not touch stored tasks"
    );
}

#[test]
fn get_out_of_range_fails() {
    let registry = TaskRegistry::new();

    let err = registry.get(0).expect_err("empty registry has no index 0");
    assert_eq!(err, RegistryError::IndexOutOfRange { index: 0, len: 0 });
}

#[test]
fn insertion_order_is_stable_across_completion() {
    let mut registry = TaskRegistry::new();
    registry.add("A", "d1").unwrap();
    registry.add("B", "d2").unwrap();
    registry.add("C", "d3").unwrap();

    registry.complete(1).unwrap();

    // Completion mutates in place; positions never shift.
    let titles: Vec<&str> = registry.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["A", "B", "C"]);
    assert!(!registry.get(0).unwrap().completed);
    assert!(registry.get(1).unwrap().completed);
    assert!(!registry.get(2).unwrap().completed);
}

#[test]
fn duplicate_tasks_complete_independently() {
    let mut registry = TaskRegistry::new();
    registry.add("Essay", "2024-01-01").unwrap();
    registry.add("Essay", "2024-01-01").unwrap();

    registry.complete(0).unwrap();

    assert!(registry.get(0).unwrap().completed);
    assert!(!registry.get(1).unwrap().completed);
}

#[test]
fn display_lines_follow_the_state_machine() {
    let mut registry = TaskRegistry::new();
    registry.add("Essay", "2024-01-01").unwrap();

    assert_eq!(
        task_line(registry.get(0).unwrap()),
        "Essay - 2024-01-01 (Incomplete)"
    );

    registry.complete(0).unwrap();
    assert_eq!(
        task_line(registry.get(0).unwrap()),
        "✅ Essay - 2024-01-01 (Completed)"
    );
}
