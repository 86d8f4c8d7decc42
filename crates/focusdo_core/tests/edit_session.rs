use focusdo_core::{EditSession, EditState, ScratchBuffer, Task, TaskStatus};
use uuid::Uuid;

fn sample_task(id: &str, title: &str) -> Task {
    Task {
        id: Uuid::parse_str(id).unwrap(),
        title: title.to_string(),
        description: format!("{title} description"),
        status: TaskStatus::InProgress,
        owner_id: Uuid::parse_str("00000000-0000-4000-8000-00000000000a").unwrap(),
        owner_display_name: "Owner".to_string(),
        created_at: 1_700_000_000_000,
    }
}

#[test]
fn new_session_starts_idle_with_defaults() {
    let session = EditSession::new();

    assert_eq!(session.state(), EditState::Idle);
    assert_eq!(session.editing_task(), None);
    assert_eq!(session.buffer().title, "");
    assert_eq!(session.buffer().description, "");
    assert_eq!(session.buffer().status, TaskStatus::Todo);
}

#[test]
fn begin_edit_loads_task_values_into_scratch_buffer() {
    let mut session = EditSession::new();
    let task = sample_task("00000000-0000-4000-8000-000000000001", "draft plan");

    session.begin_edit(&task);

    assert_eq!(session.state(), EditState::Editing(task.id));
    assert_eq!(session.editing_task(), Some(task.id));
    assert_eq!(session.buffer().title, "draft plan");
    assert_eq!(session.buffer().description, "draft plan description");
    assert_eq!(session.buffer().status, TaskStatus::InProgress);
}

#[test]
fn starting_a_new_edit_silently_replaces_the_prior_buffer() {
    let mut session = EditSession::new();
    let first = sample_task("00000000-0000-4000-8000-000000000001", "first");
    let second = sample_task("00000000-0000-4000-8000-000000000002", "second");

    session.begin_edit(&first);
    session.buffer_mut().title = "half-typed change".to_string();
    session.begin_edit(&second);

    assert_eq!(session.editing_task(), Some(second.id));
    assert_eq!(session.buffer().title, "second");
}

#[test]
fn cancel_discards_buffer_and_returns_to_idle() {
    let mut session = EditSession::new();
    let task = sample_task("00000000-0000-4000-8000-000000000001", "to cancel");

    session.begin_edit(&task);
    session.buffer_mut().description = "unsaved edits".to_string();
    session.cancel();

    assert_eq!(session.state(), EditState::Idle);
    assert_eq!(session.buffer().title, "");
    assert_eq!(session.buffer().description, "");
    assert_eq!(session.buffer().status, TaskStatus::Todo);
}

#[test]
fn complete_save_resets_like_cancel() {
    let mut session = EditSession::new();
    let task = sample_task("00000000-0000-4000-8000-000000000001", "to save");

    session.begin_edit(&task);
    session.complete_save();

    assert_eq!(session.state(), EditState::Idle);
    assert_eq!(session.buffer(), &ScratchBuffer::default());
}
