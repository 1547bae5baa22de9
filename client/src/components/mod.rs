//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render artwork and homepage surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod artwork_card;
pub mod artwork_editor;
pub mod homepage_editor;
pub mod site_header;
