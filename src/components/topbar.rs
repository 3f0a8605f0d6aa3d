//! Top chrome bar: current identity and the logout action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated page mounts one of these. Logout only drives the
//! store; the surrounding guard notices the signed-out state and performs
//! the `/login` navigation, so there is exactly one redirect authority.

use leptos::prelude::*;

use crate::state::store::SessionStore;

#[component]
pub fn TopBar(#[prop(into)] title: String) -> impl IntoView {
    let store = SessionStore::expect();

    let identity = move || {
        store
            .get()
            .user
            .map(|user| (user.name, user.role.as_str().to_owned()))
    };
    let busy = move || store.get().loading;

    let on_logout = move |_| {
        if busy() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            // Transport failures are recorded in store state; local session
            // state is cleared either way.
            let _ = store.log_out().await;
        });
    };

    view! {
        <header class="topbar">
            <span class="topbar__title">{title}</span>
            <div class="topbar__session">
                {move || {
                    identity()
                        .map(|(name, role)| {
                            view! {
                                <span class="topbar__name">{name}</span>
                                <span class="topbar__role">{role}</span>
                            }
                        })
                }}
                <button class="btn" disabled=busy on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
