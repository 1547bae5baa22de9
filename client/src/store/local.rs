//! Local-mirror content source backed by a [`KeyValueStore`].

#[cfg(test)]
#[path = "local_test.rs"]
mod local_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{ContentSource, Document, StoreError};
use crate::util::storage::{self, KeyValueStore};

/// Stores each document as JSON under its fixed storage key.
#[derive(Clone, Debug, Default)]
pub struct LocalSource<S> {
    storage: S,
}

impl<S: KeyValueStore> LocalSource<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStore> ContentSource for LocalSource<S> {
    async fn fetch<T: DeserializeOwned>(&self, doc: Document) -> Result<Option<T>, StoreError> {
        let key = doc.storage_key();
        match storage::load_json::<T>(&self.storage, key) {
            None => Ok(None),
            Some(Ok(value)) => Ok(Some(value)),
            Some(Err(e)) => Err(StoreError::Malformed { key, reason: e.to_string() }),
        }
    }

    async fn store<T: Serialize + ?Sized>(&self, doc: Document, value: &T) -> Result<bool, StoreError> {
        storage::save_json(&self.storage, doc.storage_key(), value)?;
        Ok(true)
    }

    async fn health(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
