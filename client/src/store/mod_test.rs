use std::collections::HashMap;
use std::sync::Mutex;

use futures::executor::block_on;

use super::*;
use crate::net::types::default_artworks;
use crate::util::storage::{self, MemoryStorage};

// =============================================================
// Helpers
// =============================================================

#[derive(Clone, Copy, Debug)]
enum Mode {
    Unreachable,
    Status(u16),
    Up { accept_writes: bool },
}

/// Scripted stand-in for the content service.
struct FakeRemote {
    mode: Mode,
    docs: Mutex<HashMap<Document, serde_json::Value>>,
    writes: Mutex<u32>,
}

impl FakeRemote {
    fn new(mode: Mode) -> Self {
        Self { mode, docs: Mutex::new(HashMap::new()), writes: Mutex::new(0) }
    }

    fn with_doc(self, doc: Document, value: serde_json::Value) -> Self {
        self.docs.lock().unwrap().insert(doc, value);
        self
    }

    fn writes(&self) -> u32 {
        *self.writes.lock().unwrap()
    }

    fn doc(&self, doc: Document) -> Option<serde_json::Value> {
        self.docs.lock().unwrap().get(&doc).cloned()
    }
}

impl ContentSource for FakeRemote {
    async fn fetch<T: DeserializeOwned>(&self, doc: Document) -> Result<Option<T>, StoreError> {
        match self.mode {
            Mode::Unreachable => Err(StoreError::Transport("connection refused".to_owned())),
            Mode::Status(status) => Err(StoreError::Status(status)),
            Mode::Up { .. } => match self.doc(doc) {
                None => Ok(None),
                Some(value) => serde_json::from_value(value)
                    .map(Some)
                    .map_err(|e| StoreError::Decode(e.to_string())),
            },
        }
    }

    async fn store<T: Serialize + ?Sized>(&self, doc: Document, value: &T) -> Result<bool, StoreError> {
        *self.writes.lock().unwrap() += 1;
        match self.mode {
            Mode::Unreachable => Err(StoreError::Transport("connection refused".to_owned())),
            Mode::Status(status) => Err(StoreError::Status(status)),
            Mode::Up { accept_writes } => {
                if accept_writes {
                    self.docs.lock().unwrap().insert(doc, serde_json::to_value(value).unwrap());
                }
                Ok(accept_writes)
            }
        }
    }

    async fn health(&self) -> Result<(), StoreError> {
        match self.mode {
            Mode::Unreachable => Err(StoreError::Transport("connection refused".to_owned())),
            Mode::Status(status) => Err(StoreError::Status(status)),
            Mode::Up { .. } => Ok(()),
        }
    }
}

fn store_with(mode: Mode) -> (ContentStore<FakeRemote, LocalSource<MemoryStorage>>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = ContentStore::new(FakeRemote::new(mode), LocalSource::new(storage.clone()));
    (store, storage)
}

fn sample_content() -> HomepageContent {
    HomepageContent {
        artist_name: "Ada".to_owned(),
        artist_title: "Painter".to_owned(),
        artist_bio: "Bio".to_owned(),
        artist_statement: "Statement".to_owned(),
        background_image: "data:image/png;base64,AAAA".to_owned(),
    }
}

// =============================================================
// Document
// =============================================================

#[test]
fn document_paths_match_service_routes() {
    assert_eq!(Document::Homepage.path(), "/content/homepage");
    assert_eq!(Document::Artworks.path(), "/content/artworks");
    assert_eq!(Document::Homepage.storage_key(), HOMEPAGE_KEY);
    assert_eq!(Document::Artworks.storage_key(), ARTWORKS_KEY);
}

// =============================================================
// Reads
// =============================================================

#[test]
fn read_prefers_remote_data() {
    let remote = FakeRemote::new(Mode::Up { accept_writes: true })
        .with_doc(Document::Homepage, serde_json::to_value(sample_content()).unwrap());
    let storage = MemoryStorage::new();
    let mirror = HomepageContent { artist_name: "Stale".to_owned(), ..sample_content() };
    storage::save_json(&storage, HOMEPAGE_KEY, &mirror).unwrap();
    let store = ContentStore::new(remote, LocalSource::new(storage));

    assert_eq!(block_on(store.get_homepage_content()), Some(sample_content()));
}

#[test]
fn read_falls_back_to_mirror_when_remote_unreachable() {
    let (store, storage) = store_with(Mode::Unreachable);
    storage::save_json(&storage, HOMEPAGE_KEY, &sample_content()).unwrap();
    assert_eq!(block_on(store.get_homepage_content()), Some(sample_content()));
}

#[test]
fn read_falls_back_to_mirror_on_error_status() {
    let (store, storage) = store_with(Mode::Status(503));
    storage::save_json(&storage, ARTWORKS_KEY, &default_artworks()).unwrap();
    assert_eq!(block_on(store.get_artworks()), Some(default_artworks()));
}

#[test]
fn read_falls_back_to_mirror_on_malformed_remote_body() {
    let remote = FakeRemote::new(Mode::Up { accept_writes: true })
        .with_doc(Document::Artworks, serde_json::json!({"unexpected": true}));
    let storage = MemoryStorage::new();
    storage::save_json(&storage, ARTWORKS_KEY, &default_artworks()).unwrap();
    let store = ContentStore::new(remote, LocalSource::new(storage));
    assert_eq!(block_on(store.get_artworks()).map(|a| a.len()), Some(4));
}

#[test]
fn read_falls_back_to_mirror_when_remote_has_no_data() {
    let (store, storage) = store_with(Mode::Up { accept_writes: true });
    storage::save_json(&storage, HOMEPAGE_KEY, &sample_content()).unwrap();
    assert_eq!(block_on(store.get_homepage_content()), Some(sample_content()));
}

#[test]
fn read_is_none_when_neither_source_has_data() {
    let (store, _) = store_with(Mode::Unreachable);
    assert_eq!(block_on(store.get_homepage_content()), None);
    assert_eq!(block_on(store.get_artworks()), None);
}

#[test]
fn read_treats_malformed_mirror_as_absent() {
    let (store, storage) = store_with(Mode::Unreachable);
    storage.set(ARTWORKS_KEY, "[{\"id\":").unwrap();
    assert_eq!(block_on(store.get_artworks()), None);
}

// =============================================================
// Writes
// =============================================================

#[test]
fn save_then_get_round_trips_through_mirror_when_remote_unreachable() {
    let (store, _) = store_with(Mode::Unreachable);
    let content = sample_content();
    assert!(!block_on(store.save_homepage_content(&content)));
    assert_eq!(block_on(store.get_homepage_content()), Some(content));
}

#[test]
fn save_mirrors_locally_when_remote_accepts() {
    let (store, storage) = store_with(Mode::Up { accept_writes: true });
    let artworks = default_artworks();
    assert!(block_on(store.save_artworks(&artworks)));
    assert_eq!(store.remote().writes(), 1);
    assert!(store.remote().doc(Document::Artworks).is_some());
    let mirrored: Vec<ArtworkItem> = storage::load_json(&storage, ARTWORKS_KEY).unwrap().unwrap();
    assert_eq!(mirrored, artworks);
}

#[test]
fn save_reports_false_but_mirrors_when_remote_rejects() {
    let (store, storage) = store_with(Mode::Up { accept_writes: false });
    assert!(!block_on(store.save_homepage_content(&sample_content())));
    let mirrored: HomepageContent = storage::load_json(&storage, HOMEPAGE_KEY).unwrap().unwrap();
    assert_eq!(mirrored, sample_content());
}

#[test]
fn save_reports_false_but_mirrors_on_error_status() {
    let (store, storage) = store_with(Mode::Status(500));
    assert!(!block_on(store.save_artworks(&[])));
    assert_eq!(storage.get(ARTWORKS_KEY).as_deref(), Some("[]"));
}

#[test]
fn save_replaces_collection_wholesale() {
    let (store, _) = store_with(Mode::Unreachable);
    block_on(store.save_artworks(&default_artworks()));
    let only_first = vec![default_artworks().remove(0)];
    block_on(store.save_artworks(&only_first));
    assert_eq!(block_on(store.get_artworks()), Some(only_first));
}

// =============================================================
// Health
// =============================================================

#[test]
fn check_health_reflects_remote_liveness() {
    let (up, _) = store_with(Mode::Up { accept_writes: true });
    let (down, _) = store_with(Mode::Unreachable);
    let (erroring, _) = store_with(Mode::Status(502));
    assert!(block_on(up.check_health()));
    assert!(!block_on(down.check_health()));
    assert!(!block_on(erroring.check_health()));
}

// =============================================================
// Browser wiring
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_read_is_none_off_browser() {
    let store = BrowserContentStore::new(RemoteSource::new("https://api.example"), LocalSource::new(BrowserStorage));
    assert_eq!(store.endpoint(), "https://api.example");
    assert_eq!(block_on(store.get_homepage_content()), None);
    assert!(!block_on(store.save_artworks(&default_artworks())));
    assert!(!block_on(store.check_health()));
}
