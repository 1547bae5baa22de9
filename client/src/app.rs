//! Root component, HTML shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns every shared signal and provides it through context:
//! `RwSignal<BrowserSession>`, `SessionReady`, `RwSignal<HomepageState>`,
//! `RwSignal<GalleryState>`, `RwSignal<UiState>` and the `ContentHandle`.
//! The saved session is restored and content is loaded only after
//! hydration, so server and client render the same first frame.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::site_header::SiteHeader;
use crate::pages::admin::AdminPage;
use crate::pages::gallery::GalleryPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::state::gallery::GalleryState;
use crate::state::homepage::HomepageState;
use crate::state::session::{BrowserSession, SessionGuard};
use crate::state::ui::UiState;
use crate::store::{BrowserContentStore, ContentHandle};
use crate::util::endpoint::META_TAG_NAME;
use crate::util::storage::BrowserStorage;

/// Set once the saved session has been read from browser storage.
#[derive(Clone, Copy, Debug)]
pub struct SessionReady(pub RwSignal<bool>);

/// Server-rendered document. `api_endpoint` is published as
/// `<meta name="api-endpoint">` for the WASM client to pick up.
pub fn shell(options: LeptosOptions, api_endpoint: Option<String>) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                {api_endpoint.map(|url| view! { <meta name=META_TAG_NAME content=url /> })}
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionGuard::anonymous(BrowserStorage));
    let ready = RwSignal::new(false);
    let homepage = RwSignal::new(HomepageState::default());
    let gallery = RwSignal::new(GalleryState::default());
    let ui = RwSignal::new(UiState::default());
    let store: ContentHandle = Arc::new(BrowserContentStore::for_page());

    provide_context::<RwSignal<BrowserSession>>(session);
    provide_context(SessionReady(ready));
    provide_context(homepage);
    provide_context(gallery);
    provide_context(ui);
    provide_context(store.clone());

    Effect::new(move || {
        session.set(SessionGuard::restore(BrowserStorage));
        ready.set(true);
        crate::util::persist::load_content(store.clone(), homepage, gallery);
    });

    view! {
        <Title text="Scribbled Canvas" />
        <Stylesheet id="leptos" href="/pkg/scribbled-canvas.css" />
        <Router>
            <SiteHeader />
            <main class="site-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/gallery") view=GalleryPage />
                    <Route path=path!("/admin/login") view=LoginPage />
                    <Route path=path!("/admin") view=AdminPage />
                </Routes>
            </main>
        </Router>
    }
}
