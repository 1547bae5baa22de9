//! HTTP client for the remote content service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call reports
//! `StoreError::Unavailable`, which the Content Store turns into a local read.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, non-2xx statuses and undecodable bodies are all returned
//! as `StoreError`; nothing here retries or panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::{ContentSource, Document, StoreError};
use crate::util::endpoint;
#[cfg(feature = "hydrate")]
use super::types::{DataEnvelope, SuccessEnvelope};

/// Liveness path; any 2xx counts as alive.
pub const HEALTH_PATH: &str = "/content/health";

/// The content service at a fixed base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteSource {
    base_url: String,
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_owned() }
    }

    /// Source for the current page's resolved `api-endpoint`.
    pub fn from_page() -> Self {
        Self::new(endpoint::api_endpoint())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a service path.
    pub fn url(&self, path: &str) -> String {
        endpoint::join(&self.base_url, path)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_failed(err: impl std::fmt::Display) -> StoreError {
    StoreError::Transport(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_failed(err: impl std::fmt::Display) -> StoreError {
    StoreError::Decode(err.to_string())
}

/// Map an HTTP status to `Ok` for 2xx and `StoreError::Status` otherwise.
#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), StoreError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(StoreError::Status(status)) }
}

impl ContentSource for RemoteSource {
    /// `GET {base}/content/{doc}` expecting `{ "data": ... }`.
    async fn fetch<T: DeserializeOwned>(&self, doc: Document) -> Result<Option<T>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(doc.path()))
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(transport_failed)?;
            check_status(resp.status())?;
            let body: DataEnvelope<T> = resp.json().await.map_err(decode_failed)?;
            Ok(body.data)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = doc;
            Err(StoreError::Unavailable)
        }
    }

    /// `PUT {base}/content/{doc}` with the full document, expecting `{ "success": bool }`.
    async fn store<T: Serialize + ?Sized>(&self, doc: Document, value: &T) -> Result<bool, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&self.url(doc.path()))
                .json(value)
                .map_err(decode_failed)?
                .send()
                .await
                .map_err(transport_failed)?;
            check_status(resp.status())?;
            let body: SuccessEnvelope = resp.json().await.map_err(decode_failed)?;
            Ok(body.success)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (doc, value);
            Err(StoreError::Unavailable)
        }
    }

    /// `GET {base}/content/health`.
    async fn health(&self) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(HEALTH_PATH))
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(transport_failed)?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}
