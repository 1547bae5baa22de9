//! Admin editor for the homepage document.
//!
//! Shows the published copy until "Edit" opens a draft; saving replaces the
//! whole document and persists it through the Content Store. Both steps
//! require the `edit_homepage` permission.

use leptos::prelude::*;

use crate::net::types::HomepageContent;
use crate::state::homepage::HomepageState;
use crate::state::session::BrowserSession;
use crate::state::ui::UiState;
use crate::store::ContentHandle;
use crate::util::{auth, image, persist};

#[component]
pub fn HomepageEditor() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let homepage = expect_context::<RwSignal<HomepageState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let store = StoredValue::new(expect_context::<ContentHandle>());
    let error = RwSignal::new(None::<String>);

    let background = move || {
        homepage.with(|h| h.draft.as_ref().and_then(|d| d.background().map(str::to_owned)).unwrap_or_default())
    };

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
                        homepage.update(|h| h.update_draft(|c| c.background_image = url));
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
        if homepage.with_untracked(|h| h.saving) || !session.with_untracked(auth::can_edit_homepage) {
            return;
        }
        if let Some(content) = homepage.try_update(HomepageState::commit_edit).flatten() {
            error.set(None);
            persist::save_homepage(store.get_value(), content, homepage, ui);
        }
    };

    view! {
        <section class="homepage-editor">
            <Show
                when=move || homepage.with(HomepageState::is_editing) && session.with(auth::can_edit_homepage)
                fallback=move || {
                    let content = homepage.with(|h| h.content.clone());
                    view! {
                        <div class="homepage-editor__preview">
                            <h2>{content.artist_name}</h2>
                            <p class="homepage-editor__title">{content.artist_title}</p>
                            <p>{content.artist_bio}</p>
                            <blockquote>{content.artist_statement}</blockquote>
                            <Show when=move || session.with(auth::can_edit_homepage)>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || homepage.with(|h| h.saving)
                                    on:click=move |_| {
                                        if session.with_untracked(auth::can_edit_homepage) {
                                            homepage.update(HomepageState::begin_edit);
                                        }
                                    }
                                >
                                    "Edit Homepage"
                                </button>
                            </Show>
                        </div>
                    }
                }
            >
                <form class="homepage-editor__form" on:submit=on_save>
                    <ContentField label="Artist name" read=|c| c.artist_name.clone() write=|c, v| c.artist_name = v />
                    <ContentField label="Tagline" read=|c| c.artist_title.clone() write=|c, v| c.artist_title = v />
                    <ContentField
                        label="Biography"
                        multiline=true
                        read=|c| c.artist_bio.clone()
                        write=|c, v| c.artist_bio = v
                    />
                    <ContentField
                        label="Artist statement"
                        multiline=true
                        read=|c| c.artist_statement.clone()
                        write=|c, v| c.artist_statement = v
                    />
                    <label class="editor-field">
                        <span class="editor-field__label">"Background image"</span>
                        <input type="file" accept=image::ACCEPT on:change=on_image />
                    </label>
                    <Show when=move || !background().is_empty()>
                        <div class="homepage-editor__background">
                            <img src=background alt="Background preview" />
                            <button
                                class="btn"
                                type="button"
                                on:click=move |_| homepage.update(|h| h.update_draft(|c| c.background_image.clear()))
                            >
                                "Remove background"
                            </button>
                        </div>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <p class="editor-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="editor-actions">
                        <button class="btn btn--primary" type="submit">
                            "Save Homepage"
                        </button>
                        <button
                            class="btn"
                            type="button"
                            on:click=move |_| {
                                error.set(None);
                                homepage.update(HomepageState::cancel_edit);
                            }
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}

/// One input bound to a field of the homepage draft.
#[component]
fn ContentField(
    label: &'static str,
    read: fn(&HomepageContent) -> String,
    write: fn(&mut HomepageContent, String),
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let homepage = expect_context::<RwSignal<HomepageState>>();
    let value = move || homepage.with(|h| h.draft.as_ref().map(read).unwrap_or_default());
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        homepage.update(|h| h.update_draft(|c| write(c, next)));
    };

    let input = if multiline {
        view! { <textarea rows="5" prop:value=value on:input=on_input></textarea> }.into_any()
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
