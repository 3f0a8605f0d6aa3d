//! Login page: email + password against the cookie-session backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::store::SessionStore;

/// Trim and sanity-check the form before any network call.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = SessionStore::expect();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let busy = move || store.get().loading;
    // Local input problems and server-side failure copy share one slot;
    // the freshest wins.
    let error_message = move || {
        form_error
            .get()
            .map(str::to_owned)
            .or_else(|| store.get().error)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Ok((email_value, password_value)) => {
                form_error.set(None);
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    // On success the GuestOnly guard sees the signed-in
                    // state and navigates home; on failure we stay put and
                    // the store's error renders below the form.
                    let _ = store.log_in(&email_value, &password_value).await;
                });
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (email_value, password_value);
                }
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Plantdesk"</h1>
                <p class="auth-card__subtitle">"Sign in to continue"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || error_message().is_some()>
                    <p class="auth-message auth-message--error">
                        {move || error_message().unwrap_or_default()}
                    </p>
                </Show>
                <p class="auth-card__footer">
                    "No account? "
                    <a href="/signup">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
