use todo_core::{RemoveOutcome, Todo};

#[test]
fn todo_new_sets_defaults() {
    let todo = Todo::new("buy milk");

    assert!(!todo.id.is_empty());
    assert_eq!(todo.text, "buy milk");
    assert!(!todo.completed);
    assert!(!todo.created_at.is_empty());
}

#[test]
fn todo_new_generates_distinct_ids() {
    let first = Todo::new("a");
    let second = Todo::new("a");
    assert_ne!(first.id, second.id);
}

#[test]
fn created_at_is_rfc3339_utc() {
    let todo = Todo::new("stamp");
    assert!(todo.created_at.ends_with('Z'), "got {}", todo.created_at);
    assert!(looks_like_rfc3339_millis(&todo.created_at));
}

#[test]
fn toggle_flips_completion_both_ways() {
    let mut todo = Todo::with_id("1", "a", "t");

    todo.toggle();
    assert!(todo.completed);

    todo.toggle();
    assert!(!todo.completed);
}

#[test]
fn todo_serialization_uses_camel_case_wire_fields() {
    let mut todo = Todo::with_id("42", "task", "2024-01-01T00:00:00.000Z");
    todo.completed = true;

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "42",
            "text": "task",
            "completed": true,
            "createdAt": "2024-01-01T00:00:00.000Z"
        })
    );

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn todo_deserializes_non_uuid_ids() {
    let decoded: Todo = serde_json::from_str(
        r#"{"id":"1","text":"Test todo 1","completed":false,"createdAt":"2024-01-01"}"#,
    )
    .unwrap();
    assert_eq!(decoded, Todo::with_id("1", "Test todo 1", "2024-01-01"));
}

#[test]
fn remove_outcome_serializes_as_success_flag() {
    let json = serde_json::to_value(RemoveOutcome::succeeded()).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true }));
}

// `YYYY-MM-DDTHH:MM:SS.mmmZ`
fn looks_like_rfc3339_millis(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 24
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[10] == b'T'
        && bytes[13] == b':'
        && bytes[16] == b':'
        && bytes[19] == b'.'
}
