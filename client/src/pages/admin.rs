//! Admin dashboard with homepage, artwork and analytics tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only sessions that can edit see this page; anything else is redirected to
//! the login route once the saved session has been restored. Artwork
//! controls additionally require the `edit_artworks` permission. Every artwork
//! mutation (add, edit, delete, feature toggle) is applied to `GalleryState`
//! and the whole collection is then saved through the Content Store. The
//! header shows the content service's liveness and the outcome of the last
//! save.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::SessionReady;
use crate::components::artwork_card::ArtworkCard;
use crate::components::artwork_editor::ArtworkEditor;
use crate::components::homepage_editor::HomepageEditor;
use crate::net::types::ArtworkItem;
use crate::state::gallery::{GalleryState, new_artwork_id};
use crate::state::session::{BrowserSession, SessionGuard};
use crate::state::ui::{AdminTab, UiState};
use crate::store::ContentHandle;
use crate::util::storage::KeyValueStore;
use crate::util::{auth, clock, image, persist};

/// Collection figures shown on the analytics tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryStats {
    pub total: usize,
    pub featured: usize,
    pub inline_images: usize,
}

impl GalleryStats {
    pub fn of(items: &[ArtworkItem]) -> Self {
        Self {
            total: items.len(),
            featured: items.iter().filter(|a| a.featured).count(),
            inline_images: items.iter().filter(|a| image::is_inline(&a.image_url)).count(),
        }
    }
}

/// "Name (role)" for the toolbar, if signed in.
pub fn identity_label<S: KeyValueStore>(session: &SessionGuard<S>) -> Option<String> {
    session.current_user().map(|u| format!("{} ({})", u.name, u.role.as_str()))
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let SessionReady(ready) = expect_context::<SessionReady>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let store = StoredValue::new(expect_context::<ContentHandle>());

    auth::install_login_redirect(session, ready, use_navigate());

    Effect::new(move || {
        if ready.get() {
            persist::refresh_backend_status(store.get_value(), ui);
        }
    });

    let on_logout = move |_| session.update(BrowserSession::logout);

    let can_manage = move || session.with(auth::can_manage_artworks);
    let allowed = move || session.with_untracked(auth::can_manage_artworks);

    let on_add = move |_| {
        if !allowed() || !gallery.with_untracked(GalleryState::can_begin_add) {
            return;
        }
        gallery.update(|g| g.begin_add(new_artwork_id(), clock::current_year(), clock::now_ms()));
    };
    let on_edit = Callback::new(move |id: String| {
        if !allowed() {
            return;
        }
        gallery.update(|g| {
            g.begin_edit(&id);
        });
    });
    let on_toggle_featured = Callback::new(move |id: String| {
        if !allowed() {
            return;
        }
        if gallery.try_update(|g| g.toggle_featured(&id)).flatten().is_some() {
            persist::save_artworks(store.get_value(), gallery, ui);
        }
    });
    let on_delete_request = Callback::new(move |id: String| {
        if allowed() {
            ui.update(|u| u.confirm_delete = Some(id));
        }
    });

    view! {
        <Show
            when=move || ready.get() && session.with(BrowserSession::can_edit)
            fallback=move || {
                view! {
                    <div class="admin-page">
                        <p>{move || if ready.get() { "Redirecting to login..." } else { "Loading..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin-page">
                <header class="admin-page__header toolbar">
                    <span class="toolbar__title">"Dashboard"</span>
                    <span class="toolbar__divider" aria-hidden="true"></span>
                    {AdminTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="btn toolbar__tab"
                                    class:toolbar__tab--active=move || ui.with(|u| u.admin_tab == tab)
                                    on:click=move |_| ui.update(|u| u.admin_tab = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <span class="toolbar__spacer"></span>
                    <span
                        class="toolbar__backend"
                        title=move || store.with_value(|s| s.endpoint().to_owned())
                    >
                        {move || ui.with(|u| u.backend.label())}
                    </span>
                    <span class="toolbar__self">
                        {move || session.with(identity_label).unwrap_or_default()}
                    </span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <Show when=move || ui.with(|u| u.last_save.is_some())>
                    <p class="admin-page__notice">
                        {move || ui.with(|u| u.last_save.map(|o| o.message()).unwrap_or_default())}
                    </p>
                </Show>

                <div class="admin-page__body">
                    {move || match ui.with(|u| u.admin_tab) {
                        AdminTab::Homepage => view! { <HomepageEditor /> }.into_any(),
                        AdminTab::Artworks => {
                            view! {
                                <Show
                                    when=can_manage
                                    fallback=|| {
                                        view! {
                                            <p class="admin-artworks__denied">
                                                "Your role cannot manage artworks."
                                            </p>
                                        }
                                    }
                                >
                                    <section class="admin-artworks">
                                        <div class="admin-artworks__actions">
                                            <button
                                                class="btn btn--primary"
                                                on:click=on_add
                                                disabled=move || !gallery.with(GalleryState::can_begin_add)
                                            >
                                                "+ Add Artwork"
                                            </button>
                                        </div>
                                        <ArtworkEditor />
                                        <div class="admin-artworks__list">
                                            <For
                                                each=move || gallery.with(|g| g.items.clone())
                                                key=|a| (a.id.clone(), a.updated_at, a.featured)
                                                let:artwork
                                            >
                                                <ArtworkCard
                                                    artwork
                                                    on_edit=on_edit
                                                    on_delete=on_delete_request
                                                    on_toggle_featured=on_toggle_featured
                                                />
                                            </For>
                                        </div>
                                    </section>
                                </Show>
                            }
                                .into_any()
                        }
                        AdminTab::Analytics => view! { <AnalyticsPanel /> }.into_any(),
                    }}
                </div>

                <Show when=move || ui.with(|u| u.confirm_delete.is_some())>
                    <DeleteArtworkDialog />
                </Show>
            </div>
        </Show>
    }
}

/// Confirmation modal for `UiState::confirm_delete`.
#[component]
fn DeleteArtworkDialog() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let store = StoredValue::new(expect_context::<ContentHandle>());

    let title = move || {
        let id = ui.with(|u| u.confirm_delete.clone()).unwrap_or_default();
        gallery.with(|g| g.get(&id).map(|a| a.title.clone())).unwrap_or_default()
    };
    let on_cancel = Callback::new(move |()| ui.update(|u| u.confirm_delete = None));
    let submit = Callback::new(move |()| {
        if !session.with_untracked(auth::can_manage_artworks) {
            return;
        }
        let Some(id) = ui.with_untracked(|u| u.confirm_delete.clone()) else {
            return;
        };
        ui.update(|u| u.confirm_delete = None);
        if gallery.try_update(|g| g.remove(&id)).unwrap_or(false) {
            persist::save_artworks(store.get_value(), gallery, ui);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Artwork"</h2>
                <p class="dialog__danger">"Remove \"" {title} "\" from the gallery?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Placeholder analytics built from the local collection.
#[component]
fn AnalyticsPanel() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let stats = move || gallery.with(|g| GalleryStats::of(&g.items));

    view! {
        <section class="admin-analytics">
            <dl class="admin-analytics__figures">
                <dt>"Artworks"</dt>
                <dd>{move || stats().total}</dd>
                <dt>"Featured"</dt>
                <dd>{move || stats().featured}</dd>
                <dt>"Uploaded images"</dt>
                <dd>{move || stats().inline_images}</dd>
            </dl>
            <p class="admin-analytics__note">"Visitor analytics are not collected yet."</p>
        </section>
    }
}
