//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! file reading, endpoint discovery) from page and component logic so the
//! logic stays testable off the browser.

pub mod auth;
pub mod clock;
pub mod endpoint;
pub mod image;
pub mod persist;
pub mod storage;
