//! Card for one artwork in the gallery grid, the landing strip and the admin
//! list.
//!
//! DESIGN
//! ======
//! The same card serves public and admin views. Admin affordances render only
//! when the matching callback is passed, so public pages never show them.

#[cfg(test)]
#[path = "artwork_card_test.rs"]
mod artwork_card_test;

use leptos::prelude::*;

use crate::net::types::ArtworkItem;

/// "2024 · Oil on canvas" style caption; blank parts are skipped.
pub fn caption(artwork: &ArtworkItem) -> String {
    [artwork.year.trim(), artwork.medium.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

#[component]
pub fn ArtworkCard(
    artwork: ArtworkItem,
    #[prop(optional)] compact: bool,
    #[prop(optional)] on_edit: Option<Callback<String>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
    #[prop(optional)] on_toggle_featured: Option<Callback<String>>,
) -> impl IntoView {
    let caption_text = caption(&artwork);
    let ArtworkItem { id, title, dimensions, description, image_url, featured, .. } = artwork;
    let alt = title.clone();
    let has_controls = on_edit.is_some() || on_delete.is_some() || on_toggle_featured.is_some();

    let controls = has_controls.then(|| {
        let edit_id = id.clone();
        let delete_id = id.clone();
        let feature_id = id.clone();
        view! {
            <div class="artwork-card__controls">
                {on_edit
                    .map(|cb| {
                        view! {
                            <button class="btn artwork-card__edit" on:click=move |_| cb.run(edit_id.clone())>
                                "Edit"
                            </button>
                        }
                    })}
                {on_toggle_featured
                    .map(|cb| {
                        view! {
                            <button
                                class="btn artwork-card__feature"
                                on:click=move |_| cb.run(feature_id.clone())
                                title="Toggle featured"
                            >
                                {if featured { "Unfeature" } else { "Feature" }}
                            </button>
                        }
                    })}
                {on_delete
                    .map(|cb| {
                        view! {
                            <button
                                class="btn artwork-card__delete"
                                on:click=move |_| cb.run(delete_id.clone())
                                title="Delete artwork"
                                aria-label="Delete artwork"
                            >
                                "✕"
                            </button>
                        }
                    })}
            </div>
        }
    });

    view! {
        <article class="artwork-card" class:artwork-card--compact=compact data-id=id>
            <div class="artwork-card__frame">
                <img class="artwork-card__image" src=image_url alt=alt loading="lazy" />
                <Show when=move || featured>
                    <span class="artwork-card__badge">"Featured"</span>
                </Show>
            </div>
            <div class="artwork-card__body">
                <h3 class="artwork-card__title">{title}</h3>
                <p class="artwork-card__caption">{caption_text}</p>
                <Show when=move || !compact>
                    <p class="artwork-card__dimensions">{dimensions.clone()}</p>
                    <p class="artwork-card__description">{description.clone()}</p>
                </Show>
                {controls}
            </div>
        </article>
    }
}
