use std::sync::{Arc, Mutex};
use tidylist_core::{
    ListId, MemoryChannel, Notifier, NotifyChannel, StoreChange, StoreEvent, TaskId, TaskStore,
    CREATED_TITLE,
};

fn recorder(store: &mut TaskStore) -> Arc<Mutex<Vec<StoreChange>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |change| sink.lock().unwrap().push(*change));
    seen
}

#[test]
fn every_committed_mutation_is_published_once() {
    let mut store = TaskStore::new();
    let seen = recorder(&mut store);

    let list = store.create_list("Home").unwrap();
    store.set_list_date(list, "2024-05-01").unwrap();
    let task = store.add_task(list, "Buy milk").unwrap();
    store.toggle_task(list, task).unwrap();
    store.delete_task(list, task);
    store.delete_list(list);

    let events: Vec<StoreEvent> = seen.lock().unwrap().iter().map(|c| c.event).collect();
    assert_eq!(
        events,
        vec![
            StoreEvent::ListCreated { list_id: list },
            StoreEvent::ListDateSet { list_id: list },
            StoreEvent::TaskCreated {
                list_id: list,
                task_id: task
            },
            StoreEvent::TaskToggled {
                list_id: list,
                task_id: task,
                completed: true
            },
            StoreEvent::TaskDeleted {
                list_id: list,
                task_id: task
            },
            StoreEvent::ListDeleted {
                list_id: list,
                task_count: 0
            },
        ]
    );
    let versions: Vec<u64> = seen.lock().unwrap().iter().map(|c| c.version).collect();
    assert_eq!(versions, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(store.version(), 6);
}

#[test]
fn rejected_and_noop_mutations_publish_nothing() {
    let mut store = TaskStore::new();
    let seen = recorder(&mut store);

    let _ = store.create_list(" ");
    let _ = store.add_task(ListId::new(1), "x");
    let _ = store.toggle_task(ListId::new(1), TaskId::new(1));
    store.delete_list(ListId::new(1));

    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn unsubscribed_callback_stops_receiving() {
    let mut store = TaskStore::new();
    let seen = Arc::new(Mutex::new(0_u32));
    let sink = seen.clone();
    let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

    store.create_list("one").unwrap();
    assert!(store.unsubscribe(id));
    store.create_list("two").unwrap();

    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn notifier_fires_only_for_creations() {
    let memory = Arc::new(MemoryChannel::new());
    let channels: Vec<Arc<dyn NotifyChannel>> = vec![memory.clone()];
    let notifier = Notifier::with_channels(channels);
    let mut store = TaskStore::new();
    notifier.attach(&mut store);

    let list = store.create_list("Home").unwrap();
    let task = store.add_task(list, "Buy milk").unwrap();
    store.toggle_task(list, task).unwrap();
    store.set_list_date(list, "2024-05-01").unwrap();
    store.delete_list(list);

    assert!(notifier.flush());
    let delivered = memory.deliveries();
    assert_eq!(delivered.len(), 2);
    assert!(delivered.iter().all(|n| n.title == CREATED_TITLE));
}

#[test]
fn dropped_notifier_does_not_affect_mutations() {
    let mut store = TaskStore::new();
    {
        let notifier = Notifier::with_channels(Vec::new());
        notifier.attach(&mut store);
    }

    let list = store.create_list("after shutdown").unwrap();
    assert_eq!(store.find_list(list).unwrap().title(), "after shutdown");
}
