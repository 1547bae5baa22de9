//! Content Store: one read/write surface for the homepage document and the
//! artwork collection that keeps working when the content service is down.
//!
//! ARCHITECTURE
//! ============
//! Both backing strategies implement [`ContentSource`]:
//! - `net::api::RemoteSource` talks to the content service over HTTP.
//! - [`local::LocalSource`] keeps JSON documents in a [`KeyValueStore`].
//!
//! [`ContentStore`] composes a remote and a local source:
//! - Reads try the remote first and fall back to the local mirror on any
//!   failure (transport, status, decode) or when the remote has no data.
//! - Writes go to the remote and are then ALWAYS mirrored locally, whatever
//!   the remote outcome. The local copy is a mandatory mirror, not only a
//!   fallback target, so the site keeps working offline in one browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers never see a [`StoreError`]. Remote failures are logged and turned
//! into the fallback path; malformed mirror documents are logged and read as
//! absent. Remote and local copies may diverge; nothing reconciles them.
//! The last browser to save wins locally.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod local;

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::api::RemoteSource;
use crate::net::types::{ArtworkItem, HomepageContent};
use crate::util::storage::{ARTWORKS_KEY, BrowserStorage, HOMEPAGE_KEY, KeyValueStore, StorageError};

pub use local::LocalSource;

/// The two documents the site persists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Document {
    Homepage,
    Artworks,
}

impl Document {
    /// Path on the content service.
    pub fn path(self) -> &'static str {
        match self {
            Self::Homepage => "/content/homepage",
            Self::Artworks => "/content/artworks",
        }
    }

    /// Key of the local mirror entry.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Homepage => HOMEPAGE_KEY,
            Self::Artworks => ARTWORKS_KEY,
        }
    }
}

/// Why a single source could not serve a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// This build has no way to reach the source (e.g. HTTP during SSR).
    #[error("source unavailable in this environment")]
    Unavailable,
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body was not the expected envelope.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// A stored document could not be parsed.
    #[error("stored document {key} is malformed: {reason}")]
    Malformed { key: &'static str, reason: String },
    /// The local mirror refused a write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A place content documents can be read from and written to.
pub trait ContentSource {
    /// Read `doc`. `Ok(None)` means the source holds no data for it.
    fn fetch<T: DeserializeOwned>(&self, doc: Document) -> impl Future<Output = Result<Option<T>, StoreError>>;

    /// Replace `doc` wholesale. `Ok(false)` means the source answered but
    /// reported that it did not accept the write.
    fn store<T: Serialize + ?Sized>(&self, doc: Document, value: &T) -> impl Future<Output = Result<bool, StoreError>>;

    /// Liveness check.
    fn health(&self) -> impl Future<Output = Result<(), StoreError>>;
}

/// Remote-first store with an unconditional local mirror.
#[derive(Clone, Debug)]
pub struct ContentStore<R, L> {
    remote: R,
    local: L,
}

/// The store wired to the real content service and `window.localStorage`.
pub type BrowserContentStore = ContentStore<RemoteSource, LocalSource<BrowserStorage>>;

/// Shared handle provided through Leptos context.
pub type ContentHandle = Arc<BrowserContentStore>;

impl BrowserContentStore {
    /// Store for the current page, using the resolved `api-endpoint`.
    pub fn for_page() -> Self {
        Self::new(RemoteSource::from_page(), LocalSource::new(BrowserStorage))
    }
}

impl<S: KeyValueStore> ContentStore<RemoteSource, LocalSource<S>> {
    /// Base URL of the remote content service.
    pub fn endpoint(&self) -> &str {
        self.remote.base_url()
    }
}

impl<R: ContentSource, L: ContentSource> ContentStore<R, L> {
    pub fn new(remote: R, local: L) -> Self {
        Self { remote, local }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    /// Homepage document from the service, else the local mirror.
    pub async fn get_homepage_content(&self) -> Option<HomepageContent> {
        self.read(Document::Homepage).await
    }

    /// Save the homepage document. Returns whether the REMOTE write
    /// succeeded; the local mirror is written either way.
    pub async fn save_homepage_content(&self, content: &HomepageContent) -> bool {
        self.write(Document::Homepage, content).await
    }

    /// Artwork collection from the service, else the local mirror.
    pub async fn get_artworks(&self) -> Option<Vec<ArtworkItem>> {
        self.read(Document::Artworks).await
    }

    /// Replace the whole artwork collection. Same contract as
    /// [`Self::save_homepage_content`].
    pub async fn save_artworks(&self, artworks: &[ArtworkItem]) -> bool {
        self.write(Document::Artworks, artworks).await
    }

    /// Best-effort liveness check of the content service.
    pub async fn check_health(&self) -> bool {
        match self.remote.health().await {
            Ok(()) => true,
            Err(e) => {
                log::debug!("content service health check failed: {e}");
                false
            }
        }
    }

    async fn read<T: DeserializeOwned>(&self, doc: Document) -> Option<T> {
        match self.remote.fetch::<T>(doc).await {
            Ok(Some(value)) => return Some(value),
            Ok(None) => log::info!("{} has no remote data, reading local mirror", doc.path()),
            Err(e) => log::warn!("{} unavailable ({e}), reading local mirror", doc.path()),
        }
        match self.local.fetch::<T>(doc).await {
            Ok(value) => value,
            Err(e) => {
                log::error!("local mirror read failed: {e}");
                None
            }
        }
    }

    async fn write<T: Serialize + ?Sized>(&self, doc: Document, value: &T) -> bool {
        let remote_ok = match self.remote.store(doc, value).await {
            Ok(true) => true,
            Ok(false) => {
                log::warn!("{} rejected the write, saved to local mirror only", doc.path());
                false
            }
            Err(e) => {
                log::warn!("{} unavailable ({e}), saved to local mirror only", doc.path());
                false
            }
        };
        // Quota failures on the mirror are logged and otherwise not handled.
        if let Err(e) = self.local.store(doc, value).await {
            log::error!("local mirror write failed for {}: {e}", doc.storage_key());
        }
        remote_ok
    }
}
