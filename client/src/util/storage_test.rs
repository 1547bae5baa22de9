use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
    store.remove("missing");
    assert!(store.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("shared", "1").unwrap();
    assert_eq!(b.get("shared").as_deref(), Some("1"));
    assert_eq!(b.len(), 1);
}

#[test]
fn load_json_absent_key_is_none() {
    let store = MemoryStorage::new();
    assert!(load_json::<Vec<u32>>(&store, "nums").is_none());
}

#[test]
fn load_json_reports_malformed_documents() {
    let store = MemoryStorage::new();
    store.set("nums", "[1, 2,").unwrap();
    assert!(matches!(load_json::<Vec<u32>>(&store, "nums"), Some(Err(_))));
}

#[test]
fn save_json_then_load_json() {
    let store = MemoryStorage::new();
    save_json(&store, "nums", &[1_u32, 2, 3]).unwrap();
    assert_eq!(store.get("nums").as_deref(), Some("[1,2,3]"));
    let loaded: Vec<u32> = load_json(&store, "nums").unwrap().unwrap();
    assert_eq!(loaded, vec![1, 2, 3]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_off_browser() {
    let store = BrowserStorage;
    assert_eq!(store.get(USER_KEY), None);
    assert_eq!(store.set(USER_KEY, "{}"), Err(StorageError::Unavailable));
    store.remove(USER_KEY);
}

#[test]
fn storage_keys_are_distinct() {
    assert_ne!(USER_KEY, HOMEPAGE_KEY);
    assert_ne!(HOMEPAGE_KEY, ARTWORKS_KEY);
    assert_ne!(USER_KEY, ARTWORKS_KEY);
}
