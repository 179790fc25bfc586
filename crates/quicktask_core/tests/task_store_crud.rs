use quicktask_core::db::open_db_in_memory;
use quicktask_core::{SqliteKvStore, Task, TaskArchive, TaskId, TaskStore};
use rusqlite::Connection;
use std::collections::HashSet;

fn store_on(conn: &Connection) -> TaskStore<SqliteKvStore<'_>> {
    let mut store = TaskStore::new(TaskArchive::new(SqliteKvStore::new(conn)));
    store.initialize();
    store
}

fn persisted(conn: &Connection) -> Vec<Task> {
    TaskArchive::new(SqliteKvStore::new(conn)).load()
}

#[test]
fn add_appends_in_call_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    store.add("buy milk").unwrap();
    store.add("walk dog").unwrap();

    let tasks = store.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].text, "buy milk");
    assert_eq!(tasks[1].text, "walk dog");
}

#[test]
fn add_generates_distinct_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    for index in 0..50 {
        store.add(&format!("task {index}")).unwrap();
    }

    let ids: HashSet<&str> = store.tasks().iter().map(|task| task.id.as_str()).collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn add_rejects_blank_text() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    assert!(store.add("").is_none());
    assert!(store.add("   ").is_none());

    assert!(store.tasks().is_empty());
    assert!(persisted(&conn).is_empty());
}

#[test]
fn add_persists_before_returning() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    let task = store.add("buy milk").unwrap();

    let stored = persisted(&conn);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], task);
}

#[test]
fn edit_replaces_text_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    let task = store.add("draft").unwrap();
    assert!(store.edit(&task.id, "final"));

    assert_eq!(store.tasks()[0].text, "final");
    assert_eq!(persisted(&conn)[0].text, "final");
}

#[test]
fn edit_keeps_id_and_completion_flag() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    let task = store.add("draft").unwrap();
    store.toggle_complete(&task.id);
    store.edit(&task.id, "final");

    let edited = &store.tasks()[0];
    assert_eq!(edited.id, task.id);
    assert!(edited.completed);
}

#[test]
fn edit_unknown_id_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    let task = store.add("keep me").unwrap();
    let before = store.tasks().to_vec();

    assert!(!store.edit(&TaskId::from("nonexistent"), "x"));

    assert_eq!(store.tasks(), before.as_slice());
    assert_eq!(persisted(&conn), vec![task]);
}

#[test]
fn edit_blank_text_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    let task = store.add("keep me").unwrap();

    assert!(!store.edit(&task.id, "  "));
    assert_eq!(store.tasks()[0].text, "keep me");
}

#[test]
fn delete_preserves_relative_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    let first = store.add("first").unwrap();
    let second = store.add("second").unwrap();
    let third = store.add("third").unwrap();

    assert!(store.delete(&second.id));

    let remaining: Vec<&str> = store.tasks().iter().map(|task| task.id.as_str()).collect();
    assert_eq!(remaining, vec![first.id.as_str(), third.id.as_str()]);

    let stored = persisted(&conn);
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, first.id);
    assert_eq!(stored[1].id, third.id);
}

#[test]
fn delete_unknown_id_returns_false() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    store.add("only").unwrap();

    assert!(!store.delete(&TaskId::from("nonexistent")));
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn toggle_is_involutive_and_persists_each_step() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    let task = store.add("flip me").unwrap();

    assert!(store.toggle_complete(&task.id));
    assert!(store.tasks()[0].completed);
    assert!(persisted(&conn)[0].completed);

    assert!(store.toggle_complete(&task.id));
    assert!(!store.tasks()[0].completed);
    assert!(!persisted(&conn)[0].completed);
}

#[test]
fn toggle_unknown_id_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store_on(&conn);

    let task = store.add("stay").unwrap();

    assert!(!store.toggle_complete(&TaskId::from("nonexistent")));
    assert!(!store.tasks()[0].completed);
    assert_eq!(persisted(&conn), vec![task]);
}

#[test]
fn reload_round_trips_the_collection() {
    let conn = open_db_in_memory().unwrap();

    let snapshot = {
        let mut store = store_on(&conn);
        let milk = store.add("buy milk").unwrap();
        store.add("walk dog").unwrap();
        store.add("water plants").unwrap();
        store.toggle_complete(&milk.id);
        store.tasks().to_vec()
    };

    let reloaded = store_on(&conn);
    assert_eq!(reloaded.tasks(), snapshot.as_slice());
}
