use tidylist_core::{
    parse_seed, store_from_seed, CalendarView, DateSelection, ListDate, ListId, TaskId,
    TaskStore,
};

fn dated_store() -> TaskStore {
    let lists = parse_seed(
        r#"[
            {"key": 1, "title": "A", "date": "2024-05-01"},
            {"key": 2, "title": "B", "date": "2024-05-02"},
            {"key": 3, "title": "C", "date": "2024-05-01",
             "tasks": [{"key": 1, "text": "x", "completed": false}]},
            {"key": 4, "title": "D", "date": ""}
        ]"#,
    )
    .unwrap();
    store_from_seed(lists).unwrap()
}

fn keys(lists: &[tidylist_core::TaskList]) -> Vec<u64> {
    lists.iter().map(|list| list.key().get()).collect()
}

#[test]
fn lists_by_date_returns_exact_matches_in_order() {
    let store = dated_store();
    assert_eq!(keys(&store.lists_by_date("2024-05-01")), vec![1, 3]);
    assert_eq!(keys(&store.lists_by_date("2024-05-02")), vec![2]);
    assert!(store.lists_by_date("2024-5-1").is_empty());
    assert!(store.lists_by_date("2024-05-03").is_empty());
}

#[test]
fn unset_date_matches_empty_selection() {
    let store = dated_store();
    assert_eq!(keys(&store.lists_by_date("")), vec![4]);
}

#[test]
fn mutating_filter_result_does_not_touch_store() {
    let store = dated_store();
    let before = store.snapshot();

    let mut result = store.lists_by_date("2024-05-01");
    result.reverse();
    result.pop();
    result.clear();

    assert_eq!(store.snapshot(), before);
    assert_eq!(keys(&store.lists_by_date("2024-05-01")), vec![1, 3]);
}

#[test]
fn held_result_is_stable_while_store_mutates() {
    let mut store = dated_store();
    let held = store.lists_by_date("2024-05-01");

    store.toggle_task(ListId::new(3), TaskId::new(1)).unwrap();
    store.delete_list(ListId::new(1));

    assert_eq!(keys(&held), vec![1, 3]);
    let held_task = held[1].tasks().unwrap()[0].clone();
    assert!(!held_task.completed());
}

#[test]
fn calendar_view_follows_selection_and_store_changes() {
    let mut store = dated_store();
    let mut view = CalendarView::new();
    assert_eq!(view.selection(), &DateSelection::Unselected);
    assert_eq!(keys(view.lists(&store)), vec![4]);

    view.select("2024-05-01").unwrap();
    assert_eq!(keys(view.lists(&store)), vec![1, 3]);

    view.select_day(ListDate::parse("2024-05-02").unwrap().to_naive());
    assert_eq!(keys(view.lists(&store)), vec![2]);

    store.set_list_date(ListId::new(4), "2024-05-02").unwrap();
    assert_eq!(keys(view.lists(&store)), vec![2, 4]);
}
