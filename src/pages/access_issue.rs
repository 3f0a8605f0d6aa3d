//! Access-issue surface: the explicit dead end for broken role data.
//!
//! SYSTEM CONTEXT
//! ==============
//! A signed-in account whose role is missing or unrecognized cannot be
//! routed anywhere useful. This page names the problem and offers a forced
//! re-login that wipes client storage, ends the server session, and hard
//! navigates to `/login` for a clean slate.

use leptos::prelude::*;

use crate::state::store::SessionStore;

// `role` is the unrecognized role string, when the account has one at all.
#[component]
pub fn AccessIssuePage(role: Option<String>) -> impl IntoView {
    let store = SessionStore::expect();
    let busy = move || store.get().loading;

    let detail = match &role {
        Some(raw) => format!("Your account's role \"{raw}\" is not recognized by this app."),
        None => "Your account has no role assigned.".to_owned(),
    };

    let on_relogin = move |_| {
        if busy() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::util::persistence::remove(crate::state::store::STORAGE_KEY);
            let _ = store.log_out().await;
            // Hard navigation, not router navigation: reload with nothing
            // carried over.
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    };

    view! {
        <div class="access-issue">
            <h1>"Access Issue"</h1>
            <p class="access-issue__detail">{detail}</p>
            <p>"Ask an administrator to fix your account, or sign in with a different one."</p>
            <button class="btn btn--primary" disabled=busy on:click=on_relogin>
                "Log in again"
            </button>
        </div>
    }
}
