use tidylist_core::{
    parse_seed, store_from_seed, InputError, ListId, StoreError, TaskId, TaskStore,
};

fn home_store() -> TaskStore {
    let lists = parse_seed(r#"[{"key": 1, "title": "Home", "date": ""}]"#).unwrap();
    store_from_seed(lists).unwrap()
}

#[test]
fn add_toggle_delete_end_to_end() {
    let mut store = home_store();
    let home = ListId::new(1);
    assert!(store.find_list(home).unwrap().tasks().is_none());

    let task_id = store.add_task(home, "Buy milk").unwrap();
    assert_eq!(task_id, TaskId::new(1));
    let task = store.find_list(home).unwrap().find_task(task_id).unwrap();
    assert_eq!(task.text(), "Buy milk");
    assert!(!task.completed());

    assert!(store.toggle_task(home, task_id).unwrap());
    let tasks = store.find_list(home).unwrap().tasks().unwrap();
    assert!(tasks[0].completed());

    store.delete_task(home, task_id);
    let tasks = store.find_list(home).unwrap().tasks().unwrap();
    assert!(tasks.is_empty());
}

#[test]
fn add_task_to_missing_list_is_not_found_and_changes_nothing() {
    let mut store = home_store();
    store.add_task(ListId::new(1), "existing").unwrap();
    let before = store.snapshot();

    let err = store.add_task(ListId::new(2), "orphan").unwrap_err();

    assert_eq!(err, StoreError::ListNotFound(ListId::new(2)));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn missing_list_wins_over_blank_text() {
    let mut store = home_store();
    let err = store.add_task(ListId::new(7), "  ").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn blank_task_text_does_not_create_task_sequence() {
    let mut store = home_store();
    let err = store.add_task(ListId::new(1), " \t ").unwrap_err();
    assert_eq!(err, StoreError::InvalidInput(InputError::BlankText));
    assert!(store.find_list(ListId::new(1)).unwrap().tasks().is_none());
}

#[test]
fn double_toggle_restores_original_state() {
    let mut store = home_store();
    let home = ListId::new(1);
    let task_id = store.add_task(home, "water plants").unwrap();

    assert!(store.toggle_task(home, task_id).unwrap());
    assert!(!store.toggle_task(home, task_id).unwrap());

    let task = store.find_list(home).unwrap().find_task(task_id).unwrap();
    assert!(!task.completed());
}

#[test]
fn toggle_reports_missing_list_and_task() {
    let mut store = home_store();
    let home = ListId::new(1);

    assert_eq!(
        store.toggle_task(ListId::new(3), TaskId::new(1)),
        Err(StoreError::ListNotFound(ListId::new(3)))
    );
    assert_eq!(
        store.toggle_task(home, TaskId::new(1)),
        Err(StoreError::TaskNotFound {
            list_id: home,
            task_id: TaskId::new(1)
        })
    );
}

#[test]
fn same_task_key_in_different_lists_is_independent() {
    let mut store = home_store();
    let home = ListId::new(1);
    let work = store.create_list("Work").unwrap();
    let home_task = store.add_task(home, "dishes").unwrap();
    let work_task = store.add_task(work, "email").unwrap();
    assert_eq!(home_task, work_task);

    store.toggle_task(work, work_task).unwrap();
    store.delete_task(work, work_task);

    let home_list = store.find_list(home).unwrap();
    assert_eq!(home_list.task_count(), 1);
    assert!(!home_list.find_task(home_task).unwrap().completed());
}

#[test]
fn task_keys_are_not_reused_after_delete() {
    let mut store = home_store();
    let home = ListId::new(1);
    let first = store.add_task(home, "a").unwrap();
    let second = store.add_task(home, "b").unwrap();
    store.delete_task(home, second);

    let third = store.add_task(home, "c").unwrap();

    assert_eq!(first, TaskId::new(1));
    assert_eq!(third, TaskId::new(3));
}

#[test]
fn delete_task_with_unknown_keys_is_noop() {
    let mut store = home_store();
    let home = ListId::new(1);
    store.add_task(home, "keep").unwrap();
    let before = store.snapshot();
    let version = store.version();

    store.delete_task(home, TaskId::new(99));
    store.delete_task(ListId::new(99), TaskId::new(1));

    assert_eq!(store.snapshot(), before);
    assert_eq!(store.version(), version);
}
