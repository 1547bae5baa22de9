//! Reactive state containers provided through Leptos context.
//!
//! Each module is plain data plus methods; `App` wraps them in `RwSignal`s.

pub mod gallery;
pub mod homepage;
pub mod session;
pub mod ui;
