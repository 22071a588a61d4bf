use tidylist_core::{
    parse_seed, store_from_seed, InputError, ListDate, ListId, StoreError, TaskStore,
};

fn seeded() -> TaskStore {
    let lists = parse_seed(
        r#"[
            {"key": 1, "title": "Home", "date": ""},
            {"key": 2, "title": "Work", "date": "2024-05-01",
             "tasks": [{"key": 1, "text": "report", "completed": false}]}
        ]"#,
    )
    .unwrap();
    store_from_seed(lists).unwrap()
}

fn titles(store: &TaskStore) -> Vec<String> {
    store
        .lists()
        .iter()
        .map(|list| list.title().to_string())
        .collect()
}

#[test]
fn blank_title_leaves_collection_unchanged() {
    let mut store = seeded();
    let before = store.snapshot();

    for title in ["", "   ", "\t\n"] {
        let err = store.create_list(title).unwrap_err();
        assert_eq!(err, StoreError::InvalidInput(InputError::BlankTitle));
    }

    assert_eq!(store.snapshot(), before);
}

#[test]
fn create_list_appends_retrievable_undated_list() {
    let mut store = seeded();
    let before = store.len();

    let id = store.create_list("Groceries").unwrap();

    assert_eq!(store.len(), before + 1);
    let list = store.find_list(id).unwrap();
    assert_eq!(list.title(), "Groceries");
    assert_eq!(list.date(), "");
    assert!(list.list_date().is_none());
    assert!(list.tasks().is_none());
    assert_eq!(titles(&store).last().map(String::as_str), Some("Groceries"));
}

#[test]
fn new_keys_continue_after_seeded_keys() {
    let mut store = seeded();
    assert_eq!(store.create_list("Third").unwrap(), ListId::new(3));
}

#[test]
fn list_keys_stay_unique_across_create_delete_cycles() {
    let mut store = seeded();
    let mut issued = Vec::new();
    for round in 0..5 {
        let id = store.create_list(format!("round {round}")).unwrap();
        assert!(!issued.contains(&id));
        issued.push(id);
        store.delete_list(id);
    }
    let keys: Vec<ListId> = store.lists().iter().map(|list| list.key()).collect();
    assert_eq!(keys, vec![ListId::new(1), ListId::new(2)]);
}

#[test]
fn deleting_unknown_list_is_noop() {
    let mut store = seeded();
    let before = store.snapshot();

    store.delete_list(ListId::new(42));

    assert_eq!(store.snapshot(), before);
    assert_eq!(store.version(), 0);
}

#[test]
fn deleting_list_removes_only_that_list_and_its_tasks() {
    let mut store = seeded();
    let home = ListId::new(1);
    let work = ListId::new(2);
    store.add_task(home, "sweep").unwrap();
    let work_before = store.find_list(work).unwrap().clone();

    store.delete_list(home);

    assert!(store.find_list(home).unwrap_err().is_not_found());
    assert_eq!(store.find_list(work).unwrap(), &work_before);
    assert_eq!(titles(&store), vec!["Work".to_string()]);
}

#[test]
fn set_list_date_overwrites_previous_value() {
    let mut store = seeded();
    let work = ListId::new(2);

    store.set_list_date(work, "2024-06-30").unwrap();
    assert_eq!(store.find_list(work).unwrap().date(), "2024-06-30");

    let picked = ListDate::parse("2025-01-02").unwrap().to_naive();
    store.set_list_date_from(work, picked).unwrap();
    assert_eq!(store.find_list(work).unwrap().date(), "2025-01-02");
}

#[test]
fn set_list_date_reports_missing_list_and_bad_dates() {
    let mut store = seeded();

    assert_eq!(
        store.set_list_date(ListId::new(9), "2024-01-01"),
        Err(StoreError::ListNotFound(ListId::new(9)))
    );

    let err = store.set_list_date(ListId::new(1), "2024-13-01").unwrap_err();
    assert_eq!(
        err,
        StoreError::InvalidInput(InputError::InvalidDate("2024-13-01".to_string()))
    );
    assert_eq!(store.find_list(ListId::new(1)).unwrap().date(), "");
}
