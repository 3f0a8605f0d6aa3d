//! Boot gate: hold the route tree back until the first auth check settles.
//!
//! SYSTEM CONTEXT
//! ==============
//! On a fresh page load the cookie may still be good even though nothing is
//! in memory yet. Evaluating routes before the first check answers would
//! bounce such a user to `/login` for a moment. The gate renders a loading
//! screen instead, and once the first check resolves it renders children
//! unconditionally and stays open; later decisions belong to the guards.

use leptos::prelude::*;

use crate::state::store::SessionStore;

/// Full-viewport loading indicator, shared with the route guards.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="gate-screen">
            <div class="gate-screen__spinner" aria-hidden="true"></div>
            <p class="gate-screen__label">"Loading..."</p>
        </div>
    }
}

/// Wraps the route tree; fires the first auth check and blocks until it
/// resolves.
#[component]
pub fn SessionBoot(children: ChildrenFn) -> impl IntoView {
    let store = SessionStore::expect();

    // Component bodies run exactly once, so this is the one first check.
    // `start_check` flips `checking_auth` before returning, so the first
    // render below already sees the in-flight state.
    store.start_check();

    // Latch: once the first check settles the tree stays mounted, even
    // while later re-checks flip `checking_auth` again.
    let booted = RwSignal::new(false);
    Effect::new(move || {
        if !booted.get_untracked() && !store.get().checking_auth {
            booted.set(true);
        }
    });

    view! {
        <Show
            when=move || booted.get() || !store.get().checking_auth
            fallback=|| view! { <LoadingScreen/> }
        >
            {children()}
        </Show>
    }
}
