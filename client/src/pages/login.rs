//! Admin login page backed by the Session/Role Guard.
//!
//! Credentials are checked locally by `SessionGuard::login`; a successful
//! login navigates to the admin dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SessionReady;
use crate::state::session::BrowserSession;
use crate::util::auth::ADMIN_PATH;

/// Trim the email and require both fields before trying the guard.
///
/// # Errors
///
/// Returns the inline message to show when a field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let SessionReady(ready) = expect_context::<SessionReady>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Already signed in with edit rights: skip the form.
    Effect::new(move || {
        if ready.get() && session.with(BrowserSession::can_edit) {
            navigate(ADMIN_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let result = session.try_update(|s| s.login(&email_value, &password_value).map(|_| ()));
        match result {
            Some(Ok(())) => {
                info.set(String::new());
                password.set(String::new());
            }
            Some(Err(e)) => info.set(e.to_string()),
            None => {}
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Scribbled Canvas"</h1>
                <p class="login-card__subtitle">"Admin Sign In"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
