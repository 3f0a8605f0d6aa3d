//! Signup page: create an account and land signed in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::state::store::SessionStore;

const MIN_PASSWORD_LEN: usize = 6;

/// Trim and sanity-check the form before any network call.
fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let store = SessionStore::expect();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let busy = move || store.get().loading;
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
        match validate_signup_input(&name.get(), &email.get(), &password.get()) {
            Ok((name_value, email_value, password_value)) => {
                form_error.set(None);
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    // Success signs us in and the GuestOnly guard navigates
                    // home; failure keeps the visitor here with the store's
                    // error shown.
                    let _ = store
                        .sign_up(&name_value, &email_value, &password_value)
                        .await;
                });
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (name_value, email_value, password_value);
                }
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Plantdesk"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <Show when=move || error_message().is_some()>
                    <p class="auth-message auth-message--error">
                        {move || error_message().unwrap_or_default()}
                    </p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
