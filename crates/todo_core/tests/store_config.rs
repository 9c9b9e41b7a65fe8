use std::path::PathBuf;
use todo_core::{open_store, StoreConfig, StoreKind, Todo, TodoService};

#[test]
fn open_store_json_writes_to_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.json");
    let config = StoreConfig::new(StoreKind::Json, Some(path.clone()));

    let service = TodoService::new(open_store(&config).unwrap());
    service.create("from config").unwrap();

    assert!(path.exists());
}

#[test]
fn open_store_sqlite_persists_between_opens() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(
        StoreKind::Sqlite,
        Some(dir.path().join("todos.sqlite3")),
    );

    let created = TodoService::new(open_store(&config).unwrap())
        .create("kept")
        .unwrap();
    let listed = TodoService::new(open_store(&config).unwrap())
        .list_all()
        .unwrap();

    assert_eq!(listed, vec![created]);
}

#[test]
fn open_store_memory_starts_empty_each_time() {
    let config = StoreConfig::new(StoreKind::Memory, Some(PathBuf::from("ignored")));

    let first = TodoService::new(open_store(&config).unwrap());
    first.create("transient").unwrap();
    let second = TodoService::new(open_store(&config).unwrap());

    assert_eq!(first.list_all().unwrap().len(), 1);
    assert_eq!(second.list_all().unwrap(), Vec::<Todo>::new());
}
