//! Add/edit form for a single artwork.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the open `ArtworkDraft` from `GalleryState`. Every keystroke goes
//! through `GalleryState::update_draft`, so the draft id cannot be changed
//! from the form. Saving commits the draft into the collection and then
//! persists the whole collection through the Content Store.

use leptos::prelude::*;

use crate::net::types::ArtworkItem;
use crate::state::gallery::{DraftMode, GalleryState};
use crate::state::ui::UiState;
use crate::store::ContentHandle;
use crate::util::{clock, image, persist};

#[component]
pub fn ArtworkEditor() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let store = StoredValue::new(expect_context::<ContentHandle>());
    let error = RwSignal::new(None::<String>);

    let heading = move || {
        gallery.with(|g| match g.draft.as_ref().map(|d| d.mode) {
            Some(DraftMode::Editing) => "Edit Artwork",
            _ => "Add Artwork",
        })
    };
    let preview = move || gallery.with(|g| g.draft.as_ref().map(|d| d.item.image_url.clone()).unwrap_or_default());
    let featured = move || gallery.with(|g| g.draft.as_ref().is_some_and(|d| d.item.featured));
    let can_save = move || gallery.with(|g| g.draft_is_complete() && !g.saving);

    let on_image = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = image::selected_file(&ev) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match image::read_as_data_url(file).await {
                    Ok(url) => {
                        error.set(None);
                        gallery.update(|g| g.update_draft(|a| a.image_url = url));
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if gallery.with_untracked(|g| g.saving) {
            return;
        }
        match gallery.try_update(|g| g.commit_draft(clock::now_ms())) {
            Some(Ok(())) => {
                error.set(None);
                persist::save_artworks(store.get_value(), gallery, ui);
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    };

    let on_cancel = move |_| {
        error.set(None);
        gallery.update(GalleryState::cancel_draft);
    };

    view! {
        <Show when=move || gallery.with(|g| g.draft.is_some())>
            <form class="artwork-editor" on:submit=on_save>
                <h2 class="artwork-editor__heading">{heading}</h2>
                <DraftField label="Title" read=|a| a.title.clone() write=|a, v| a.title = v />
                <DraftField label="Year" read=|a| a.year.clone() write=|a, v| a.year = v />
                <DraftField label="Medium" read=|a| a.medium.clone() write=|a, v| a.medium = v />
                <DraftField label="Dimensions" read=|a| a.dimensions.clone() write=|a, v| a.dimensions = v />
                <DraftField
                    label="Description"
                    multiline=true
                    read=|a| a.description.clone()
                    write=|a, v| a.description = v
                />
                <DraftField label="Image URL" read=|a| a.image_url.clone() write=|a, v| a.image_url = v />
                <label class="editor-field">
                    <span class="editor-field__label">"Upload image"</span>
                    <input type="file" accept=image::ACCEPT on:change=on_image />
                </label>
                <Show when=move || !preview().is_empty()>
                    <img class="artwork-editor__preview" src=preview alt="Preview" />
                </Show>
                <label class="editor-field editor-field--inline">
                    <input
                        type="checkbox"
                        prop:checked=featured
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            gallery.update(|g| g.update_draft(|a| a.featured = checked));
                        }
                    />
                    <span>"Featured on the homepage"</span>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="editor-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="editor-actions">
                    <button class="btn btn--primary" type="submit" disabled=move || !can_save()>
                        {move || if gallery.with(|g| g.saving) { "Saving..." } else { "Save Artwork" }}
                    </button>
                    <button class="btn" type="button" on:click=on_cancel>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}

/// One text input bound to a field of the open draft.
#[component]
fn DraftField(
    label: &'static str,
    read: fn(&ArtworkItem) -> String,
    write: fn(&mut ArtworkItem, String),
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let value = move || gallery.with(|g| g.draft.as_ref().map(|d| read(&d.item)).unwrap_or_default());
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        gallery.update(|g| g.update_draft(|a| write(a, next)));
    };

    let input = if multiline {
        view! { <textarea rows="4" prop:value=value on:input=on_input></textarea> }.into_any()
    } else {
        view! { <input type="text" prop:value=value on:input=on_input /> }.into_any()
    };

    view! {
        <label class="editor-field">
            <span class="editor-field__label">{label}</span>
            {input}
        </label>
    }
}
