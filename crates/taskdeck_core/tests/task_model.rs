use taskdeck_core::{DueDate, DueTime, Task, TaskList, TaskValidationError, ALL_TASKS};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("hello", "Personal");

    assert!(!task.id.is_nil());
    assert_eq!(task.text, "hello");
    assert_eq!(task.date, None);
    assert_eq!(task.time, None);
    assert!(!task.completed);
    assert_eq!(task.list, "Personal");
    assert!(task.created_at > 0);
    assert!(task.validate().is_ok());
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::new("ship groceries", "Shopping");
    task.id = task_id;
    task.date = Some(DueDate::parse("2024-06-01").unwrap());
    task.time = Some(DueTime::parse("08:15").unwrap());
    task.created_at = 1_700_000_000_000;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["text"], "ship groceries");
    assert_eq!(json["date"], "2024-06-01");
    assert_eq!(json["time"], "08:15");
    assert_eq!(json["completed"], false);
    assert_eq!(json["list"], "Shopping");
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn absent_date_and_time_are_omitted_from_the_payload() {
    let task = Task::new("plain", "Work");
    let json = serde_json::to_value(&task).unwrap();

    assert!(json.get("date").is_none());
    assert!(json.get("time").is_none());
}

#[test]
fn validate_rejects_reserved_list_ownership() {
    let task = Task::new("misfiled", ALL_TASKS);
    assert_eq!(task.validate().unwrap_err(), TaskValidationError::ReservedList);
}

#[test]
fn validate_rejects_time_without_date() {
    let mut task = Task::new("dentist", "Personal");
    task.time = Some(DueTime::parse("09:30").unwrap());

    assert_eq!(
        task.validate().unwrap_err(),
        TaskValidationError::TimeWithoutDate
    );
}

#[test]
fn list_serialization_round_trips() {
    let list = TaskList::new("Errands").unwrap();

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["id"], list.id.to_string());
    assert_eq!(json["name"], "Errands");

    let decoded: TaskList = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, list);
}
