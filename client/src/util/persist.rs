//! Background load/save of page state through the Content Store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages mutate `GalleryState` / `HomepageState` synchronously and then call
//! into this module, which snapshots the document, clears the `saving` flag
//! when the store settles, and posts a transient notice to `UiState`.
//! Everything is a no-op outside the browser build.

use leptos::prelude::*;

use crate::net::types::HomepageContent;
use crate::state::gallery::GalleryState;
use crate::state::homepage::HomepageState;
use crate::state::ui::UiState;
use crate::store::ContentHandle;

/// How long a save notice stays visible.
#[cfg(feature = "hydrate")]
const NOTICE_DURATION: std::time::Duration = std::time::Duration::from_secs(4);

/// Fetch both documents and adopt whatever the store resolves.
pub fn load_content(store: ContentHandle, homepage: RwSignal<HomepageState>, gallery: RwSignal<GalleryState>) {
    #[cfg(feature = "hydrate")]
    {
        homepage.update(|h| h.loading = true);
        gallery.update(|g| g.loading = true);
        leptos::task::spawn_local(async move {
            let content = store.get_homepage_content().await;
            homepage.update(|h| h.apply_loaded(content));
            let artworks = store.get_artworks().await;
            gallery.update(|g| g.apply_loaded(artworks));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (store, homepage, gallery);
}

/// Persist the current artwork collection.
pub fn save_artworks(store: ContentHandle, gallery: RwSignal<GalleryState>, ui: RwSignal<UiState>) {
    let items = gallery.with_untracked(|g| g.items.clone());
    gallery.update(|g| g.saving = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let remote_ok = store.save_artworks(&items).await;
        gallery.update(|g| g.saving = false);
        announce(ui, remote_ok).await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, items, ui);
        gallery.update(|g| g.saving = false);
    }
}

/// Persist a committed homepage document.
pub fn save_homepage(
    store: ContentHandle,
    content: HomepageContent,
    homepage: RwSignal<HomepageState>,
    ui: RwSignal<UiState>,
) {
    homepage.update(|h| h.saving = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let remote_ok = store.save_homepage_content(&content).await;
        homepage.update(|h| h.saving = false);
        announce(ui, remote_ok).await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, content, ui);
        homepage.update(|h| h.saving = false);
    }
}

/// Check the content service and record the result.
pub fn refresh_backend_status(store: ContentHandle, ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let alive = store.check_health().await;
        ui.update(|u| u.backend = crate::state::ui::BackendStatus::from_health(alive));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (store, ui);
}

#[cfg(feature = "hydrate")]
async fn announce(ui: RwSignal<UiState>, remote_ok: bool) {
    let outcome = crate::state::ui::SaveOutcome::from_remote(remote_ok);
    let Some(seq) = ui.try_update(|u| u.record_save(outcome)) else {
        return;
    };
    gloo_timers::future::sleep(NOTICE_DURATION).await;
    ui.try_update(|u| u.clear_save_notice(seq));
}
