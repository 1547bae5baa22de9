//! Landing page: hero from the homepage document plus the featured strip.

use leptos::prelude::*;

use crate::components::artwork_card::ArtworkCard;
use crate::state::gallery::GalleryState;
use crate::state::homepage::HomepageState;

/// Inline style for the hero background. Falls back to the CSS gradient.
pub fn hero_style(background: Option<&str>) -> String {
    background.map_or_else(String::new, |url| {
        format!("background-image: url(\"{}\");", url.replace('"', "%22"))
    })
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let homepage = expect_context::<RwSignal<HomepageState>>();
    let gallery = expect_context::<RwSignal<GalleryState>>();

    let featured = move || gallery.with(|g| g.featured().cloned().collect::<Vec<_>>());

    view! {
        <section class="hero" style=move || homepage.with(|h| hero_style(h.content.background()))>
            <div class="hero__inner">
                <h1 class="hero__name">{move || homepage.with(|h| h.content.artist_name.clone())}</h1>
                <p class="hero__title">{move || homepage.with(|h| h.content.artist_title.clone())}</p>
                <p class="hero__bio">{move || homepage.with(|h| h.content.artist_bio.clone())}</p>
                <blockquote class="hero__statement">
                    {move || homepage.with(|h| h.content.artist_statement.clone())}
                </blockquote>
                <a class="btn btn--primary" href="/gallery">
                    "View Gallery"
                </a>
            </div>
        </section>
        <section class="featured">
            <h2 class="featured__heading">"Featured Works"</h2>
            <Show
                when=move || !featured().is_empty()
                fallback=|| view! { <p class="featured__empty">"No featured works yet."</p> }
            >
                <div class="featured__strip">
                    <For each=featured key=|a| (a.id.clone(), a.updated_at) let:artwork>
                        <ArtworkCard artwork compact=true />
                    </For>
                </div>
            </Show>
        </section>
    }
}
