use pantry::api::{InventoryService, PantryPaths};
use pantry::model::{Category, Document};
use pantry::store::fs::FileStore;
use pantry::store::InventoryStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    (dir, store)
}

#[test]
fn test_missing_collection_is_empty() {
    let (_dir, store) = setup();
    assert!(store.fetch_all().unwrap().is_empty());
    assert_eq!(store.read_one("egg").unwrap(), None);
}

#[test]
fn test_write_read_delete() {
    let (_dir, mut store) = setup();
    let doc = Document::new(Category::Dairy, 2);

    store.write_one("egg", &doc).unwrap();
    assert_eq!(store.read_one("egg").unwrap(), Some(doc));

    store.delete_one("egg").unwrap();
    assert_eq!(store.read_one("egg").unwrap(), None);

    // Deleting again is fine.
    store.delete_one("egg").unwrap();
}

#[test]
fn test_document_layout_on_disk() {
    let (dir, mut store) = setup();
    store
        .write_one("apple", &Document::new(Category::Fruit, 3))
        .unwrap();

    let path = dir.path().join("inventory.json");
    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        serde_json::json!({ "apple": { "category": "fruit", "quantity": 3 } })
    );

    // No temp files left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_named_collection() {
    let (dir, store) = setup();
    let mut store = store.with_collection("larder");
    store
        .write_one("rice", &Document::new(Category::Grain, 1))
        .unwrap();

    assert!(dir.path().join("larder.json").exists());
    assert!(!dir.path().join("inventory.json").exists());
}

#[test]
fn test_corrupt_collection_is_store_unavailable() {
    let (dir, store) = setup();
    fs::write(dir.path().join("inventory.json"), "{ not json").unwrap();

    assert!(store.fetch_all().unwrap_err().is_store_unavailable());
    assert!(store.read_one("egg").unwrap_err().is_store_unavailable());
}

#[test]
fn test_unwritable_root_is_store_unavailable() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "file, not a directory").unwrap();

    let mut store = FileStore::new(blocker.join("data"));
    let err = store
        .write_one("egg", &Document::new(Category::Dairy, 1))
        .unwrap_err();
    assert!(err.is_store_unavailable());
}

#[test]
fn test_service_over_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let paths = PantryPaths::new(dir.path().to_path_buf());

    let mut svc = InventoryService::new(FileStore::new(dir.path().to_path_buf()), paths.clone());
    svc.increment("egg", Some("dairy")).unwrap();
    svc.increment("egg", None).unwrap();

    let mut reopened = InventoryService::new(FileStore::new(dir.path().to_path_buf()), paths);
    reopened.refresh().unwrap();
    assert_eq!(reopened.snapshot().len(), 1);
    assert_eq!(reopened.snapshot()[0].quantity, 2);
    assert_eq!(reopened.snapshot()[0].category, Category::Dairy);

    reopened.decrement("egg").unwrap();
    reopened.decrement("egg").unwrap();
    assert!(reopened.snapshot().is_empty());
    assert!(FileStore::new(dir.path().to_path_buf())
        .fetch_all()
        .unwrap()
        .is_empty());
}
