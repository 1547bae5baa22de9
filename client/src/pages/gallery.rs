//! Public gallery listing every artwork in stored order.

use leptos::prelude::*;

use crate::components::artwork_card::ArtworkCard;
use crate::state::gallery::GalleryState;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let items = move || gallery.with(|g| g.items.clone());

    view! {
        <section class="gallery-page">
            <h1 class="gallery-page__heading">"Gallery"</h1>
            <Show when=move || gallery.with(|g| g.loading)>
                <p class="gallery-page__loading">"Loading artworks..."</p>
            </Show>
            <Show
                when=move || !items().is_empty()
                fallback=|| view! { <p class="gallery-page__empty">"No artworks yet."</p> }
            >
                <div class="gallery-page__grid">
                    <For each=items key=|a| (a.id.clone(), a.updated_at, a.featured) let:artwork>
                        <ArtworkCard artwork />
                    </For>
                </div>
            </Show>
        </section>
    }
}
