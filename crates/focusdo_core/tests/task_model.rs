use focusdo_core::model::task::validate_task_fields;
use focusdo_core::{SentimentLabel, SentimentResult, Task, TaskStatus, TaskValidationError};
use uuid::Uuid;

#[test]
fn validate_task_fields_trims_whitespace() {
    assert_eq!(
        validate_task_fields("  ", "body"),
        Err(TaskValidationError::EmptyTitle)
    );
    assert_eq!(
        validate_task_fields("title", "\t\n"),
        Err(TaskValidationError::EmptyDescription)
    );
    assert_eq!(validate_task_fields(" title ", " body "), Ok(()));
}

#[test]
fn task_status_defaults_to_todo() {
    assert_eq!(TaskStatus::default(), TaskStatus::Todo);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let owner_id = Uuid::parse_str("66666666-7777-4888-8999-aaaaaaaaaaaa").unwrap();
    let task = Task {
        id: task_id,
        title: "Buy milk".to_string(),
        description: "2%".to_string(),
        status: TaskStatus::InProgress,
        owner_id,
        owner_display_name: "U".to_string(),
        created_at: 1_700_000_000_000,
    };

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["title"], "Buy milk");
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["owner_id"], owner_id.to_string());
    assert_eq!(json["owner_display_name"], "U");
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn sentiment_result_serialization_uses_snake_case_labels() {
    let result = SentimentResult::keyword(SentimentLabel::Negative, "sad");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["label"], "negative");
    assert_eq!(json["matched_keyword"], "sad");

    let plain = SentimentResult::plain(SentimentLabel::Neutral);
    let json = serde_json::to_value(&plain).unwrap();
    assert_eq!(json["label"], "neutral");
    assert_eq!(json["matched_keyword"], serde_json::Value::Null);
}
