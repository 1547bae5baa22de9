//! Top navigation bar shared by every route.

use leptos::prelude::*;

use crate::state::session::BrowserSession;
use crate::util::auth::{ADMIN_PATH, LOGIN_PATH};

/// Brand, public links, and an admin entry that reflects the session.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let can_edit = move || session.with(BrowserSession::can_edit);

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Scribbled Canvas"
            </a>
            <nav class="site-header__nav">
                <a href="/">"Home"</a>
                <a href="/gallery">"Gallery"</a>
                <Show
                    when=can_edit
                    fallback=|| view! { <a class="site-header__admin" href=LOGIN_PATH>"Admin"</a> }
                >
                    <a class="site-header__admin" href=ADMIN_PATH>
                        "Dashboard"
                    </a>
                </Show>
            </nav>
        </header>
    }
}
