//! Shared admin-route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin routes apply identical redirect behavior: a session that cannot
//! edit is sent to the login page. This is UI routing only, not security.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{BrowserSession, Permission, SessionGuard};
use crate::util::storage::KeyValueStore;

pub const LOGIN_PATH: &str = "/admin/login";
pub const ADMIN_PATH: &str = "/admin";

/// Whether an admin route should bounce this session to the login page.
pub fn should_redirect_to_login<S: KeyValueStore>(session: &SessionGuard<S>) -> bool {
    !session.can_edit()
}

/// Whether the artwork add/edit/delete/feature controls are shown.
pub fn can_manage_artworks<S: KeyValueStore>(session: &SessionGuard<S>) -> bool {
    session.can_edit() && session.has(Permission::EditArtworks)
}

/// Whether the homepage editor may open a draft.
pub fn can_edit_homepage<S: KeyValueStore>(session: &SessionGuard<S>) -> bool {
    session.can_edit() && session.has(Permission::EditHomepage)
}

/// Redirect to [`LOGIN_PATH`] whenever the session loses edit rights.
/// Nothing happens until `ready` is set, i.e. until the saved session has
/// been restored in the browser.
pub fn install_login_redirect<F>(session: RwSignal<BrowserSession>, ready: RwSignal<bool>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if ready.get() && session.with(should_redirect_to_login) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
