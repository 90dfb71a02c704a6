use taskdeck_core::{
    DueDate, DueTime, MemoryStorage, Store, StoreError, TaskDraft, TaskValidationError, ALL_TASKS,
};
use uuid::Uuid;

fn open_store() -> Store<MemoryStorage> {
    Store::open(MemoryStorage::new()).unwrap()
}

#[test]
fn create_task_joins_active_list_and_is_listed() {
    let mut store = open_store();
    store.select_list("Work");

    let created = store.create_task(&TaskDraft::new("write report")).unwrap();
    assert_eq!(created.list, "Work");
    assert!(!created.completed);
    assert!(created.date.is_none());
    assert!(created.time.is_none());

    let visible = store.list_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, created.id);
    assert_eq!(visible[0].text, "write report");
}

#[test]
fn create_task_under_all_tasks_falls_back_to_personal() {
    let mut store = open_store();
    assert_eq!(store.selection().name(), ALL_TASKS);

    let created = store.create_task(&TaskDraft::new("default home")).unwrap();
    assert_eq!(created.list, "Personal");
}

#[test]
fn create_task_trims_text_before_storing() {
    let mut store = open_store();
    let created = store.create_task(&TaskDraft::new("  buy milk  ")).unwrap();
    assert_eq!(created.text, "buy milk");
}

#[test]
fn empty_text_is_rejected_and_collection_unchanged() {
    let mut store = open_store();

    for text in ["", "   ", "\t\n"] {
        let err = store.create_task(&TaskDraft::new(text)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Task(TaskValidationError::EmptyText)
        ));
    }

    assert_eq!(store.count_for_list(ALL_TASKS), 0);
    assert!(store.list_tasks().is_empty());
}

#[test]
fn time_without_date_is_rejected() {
    let mut store = open_store();
    let draft = TaskDraft::new("dentist").with_time(DueTime::parse("09:30").unwrap());

    let err = store.create_task(&draft).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Task(TaskValidationError::TimeWithoutDate)
    ));
}

#[test]
fn update_rewrites_fields_and_preserves_identity() {
    let mut store = open_store();
    store.select_list("Work");
    let created = store
        .create_task(
            &TaskDraft::new("draft slides").with_date(DueDate::parse("2024-05-01").unwrap()),
        )
        .unwrap();

    let draft = TaskDraft::new("  final slides ")
        .with_date(DueDate::parse("2024-05-02").unwrap())
        .with_time(DueTime::parse("14:00").unwrap());
    let updated = store.update_task(created.id, &draft).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "final slides");
    assert_eq!(updated.date.as_ref().unwrap().as_str(), "2024-05-02");
    assert_eq!(updated.time.as_ref().unwrap().as_str(), "14:00");
    assert_eq!(updated.list, created.list);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.completed, created.completed);
}

#[test]
fn update_with_empty_text_keeps_stored_task() {
    let mut store = open_store();
    let created = store.create_task(&TaskDraft::new("keep me")).unwrap();

    let err = store.update_task(created.id, &TaskDraft::new("  ")).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Task(TaskValidationError::EmptyText)
    ));
    assert_eq!(store.get_task(created.id).unwrap().text, "keep me");
}

#[test]
fn update_unknown_id_returns_not_found() {
    let mut store = open_store();
    let missing = Uuid::new_v4();

    let err = store.update_task(missing, &TaskDraft::new("ghost")).unwrap_err();
    assert!(matches!(err, StoreError::TaskNotFound(id) if id == missing));
}

#[test]
fn delete_removes_the_task() {
    let mut store = open_store();
    let created = store.create_task(&TaskDraft::new("gone soon")).unwrap();

    store.delete_task(created.id).unwrap();
    assert!(store.get_task(created.id).is_none());
    assert_eq!(store.count_for_list(ALL_TASKS), 0);

    let err = store.delete_task(created.id).unwrap_err();
    assert!(matches!(err, StoreError::TaskNotFound(id) if id == created.id));
}

#[test]
fn toggle_twice_restores_original_state() {
    let mut store = open_store();
    let created = store.create_task(&TaskDraft::new("flip me")).unwrap();

    assert!(store.toggle_complete(created.id).unwrap());
    assert!(!store.toggle_complete(created.id).unwrap());
    assert_eq!(store.get_task(created.id).unwrap().completed, created.completed);
}

#[test]
fn toggle_unknown_id_returns_not_found() {
    let mut store = open_store();
    let missing = Uuid::new_v4();

    let err = store.toggle_complete(missing).unwrap_err();
    assert!(matches!(err, StoreError::TaskNotFound(id) if id == missing));
}

#[test]
fn editing_marker_follows_begin_cancel_and_delete() {
    let mut store = open_store();
    let created = store.create_task(&TaskDraft::new("edit me")).unwrap();

    store.begin_edit(created.id).unwrap();
    assert_eq!(store.editing_task(), Some(created.id));

    store.cancel_edit();
    assert_eq!(store.editing_task(), None);

    store.begin_edit(created.id).unwrap();
    store.delete_task(created.id).unwrap();
    assert_eq!(store.editing_task(), None);

    let err = store.begin_edit(created.id).unwrap_err();
    assert!(matches!(err, StoreError::TaskNotFound(_)));
}

#[test]
fn selecting_a_list_clears_the_editing_marker() {
    let mut store = open_store();
    let created = store.create_task(&TaskDraft::new("edit me")).unwrap();

    store.begin_edit(created.id).unwrap();
    store.select_list("Work");
    assert_eq!(store.editing_task(), None);
}

#[test]
fn task_ids_are_unique_for_rapid_creations() {
    let mut store = open_store();
    let mut ids = std::collections::HashSet::new();

    for index in 0..50 {
        let created = store.create_task(&TaskDraft::new(format!("task {index}"))).unwrap();
        assert!(ids.insert(created.id), "duplicate id {}", created.id);
    }
}

#[test]
fn errands_scenario_end_to_end() {
    let mut store = open_store();

    store.create_list("Errands").unwrap();
    store.select_list("Errands");

    let created = store
        .create_task(&TaskDraft::new("Buy milk").with_date(DueDate::parse("2024-06-01").unwrap()))
        .unwrap();

    let visible = store.list_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].list, "Errands");
    assert!(!visible[0].completed);

    store.toggle_complete(created.id).unwrap();
    let open = store.create_task(&TaskDraft::new("Return bottles")).unwrap();

    let visible = store.list_tasks();
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].id, open.id, "incomplete task sorts first");
    assert_eq!(visible[1].id, created.id);
    assert!(visible[1].completed);
}
