//! Networking modules for the remote content service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the HTTP side of the Content Store and `types` defines
//! the documents shared by the wire format and the local mirror.

pub mod api;
pub mod types;
