use rusqlite::Connection;
use todo_core::db::open_db_in_memory;
use todo_core::{SqliteTodoStore, StoreError, Todo, TodoService, TodoStore};

#[test]
fn fresh_database_loads_as_empty_collection() {
    let store = SqliteTodoStore::open_in_memory().unwrap();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn save_then_load_preserves_fields_and_order() {
    let store = SqliteTodoStore::open_in_memory().unwrap();
    let mut done = Todo::with_id("z", "last id, first row", "2024-01-03");
    done.completed = true;
    let todos = vec![
        done,
        Todo::with_id("a", "second row", "2024-01-01"),
        Todo::with_id("m", "third row", "2024-01-02"),
    ];

    store.save_all(&todos).unwrap();

    assert_eq!(store.load_all().unwrap(), todos);
}

#[test]
fn save_replaces_all_rows() {
    let store = SqliteTodoStore::open_in_memory().unwrap();
    store
        .save_all(&[Todo::with_id("1", "a", "t"), Todo::with_id("2", "b", "t")])
        .unwrap();

    store.save_all(&[Todo::with_id("2", "b", "t")]).unwrap();

    assert_eq!(
        store.load_all().unwrap(),
        vec![Todo::with_id("2", "b", "t")]
    );
}

#[test]
fn duplicate_ids_fail_the_whole_save() {
    let store = SqliteTodoStore::open_in_memory().unwrap();
    store.save_all(&[Todo::with_id("1", "kept", "t")]).unwrap();

    let err = store
        .save_all(&[Todo::with_id("2", "a", "t"), Todo::with_id("2", "b", "t")])
        .unwrap_err();

    assert!(matches!(err, StoreError::Db(_)));
    assert_eq!(
        store.load_all().unwrap(),
        vec![Todo::with_id("1", "kept", "t")]
    );
}

#[test]
fn collection_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.sqlite3");

    let service = TodoService::new(SqliteTodoStore::open(&path).unwrap());
    let created = service.create("persist me").unwrap();
    service.toggle_complete(&created.id).unwrap();
    drop(service);

    let reopened = SqliteTodoStore::open(&path).unwrap();
    let todos = reopened.load_all().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, created.id);
    assert!(todos[0].completed);
}

#[test]
fn store_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteTodoStore::try_new(conn);
    assert!(matches!(result, Err(StoreError::InvalidData(message)) if message.contains("schema version")));
}

#[test]
fn store_rejects_connection_without_todos_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        todo_core::db::migrations::latest_version()
    ))
    .unwrap();

    let result = SqliteTodoStore::try_new(conn);
    assert!(matches!(result, Err(StoreError::InvalidData(message)) if message.contains("todos")));
}

#[test]
fn invalid_completed_value_is_rejected_on_load() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO todos (id, position, text, completed, created_at)
         VALUES ('1', 0, 'a', 7, 't');",
        [],
    )
    .unwrap();
    let store = SqliteTodoStore::try_new(conn).unwrap();

    let err = store.load_all().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(message) if message.contains("completed")));
}

#[test]
fn empty_id_is_rejected_on_load() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO todos (id, position, text, completed, created_at)
         VALUES ('', 0, 'a', 0, 't');",
        [],
    )
    .unwrap();
    let store = SqliteTodoStore::try_new(conn).unwrap();

    assert!(matches!(
        store.load_all(),
        Err(StoreError::InvalidData(_))
    ));
}
