//! Route guards: render, hold, or redirect based on session state.
//!
//! DESIGN
//! ======
//! Each guard is a pure decision function over `SessionState` paired with a
//! thin component shell. The functions are the part worth testing; the shell
//! just recomputes the decision reactively, navigates on `Redirect`, and
//! never mounts protected children unless the decision is `Allow`.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::boot::LoadingScreen;
use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::state::store::SessionStore;

/// What a guard does with the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected children.
    Allow,
    /// An auth check is still in flight; show the loading screen.
    Loading,
    /// Send the visitor to this path.
    Redirect(&'static str),
}

/// Decision for authenticated-only routes.
pub fn authed_decision(state: &SessionState) -> GuardDecision {
    if state.authenticated && state.user.is_some() {
        GuardDecision::Allow
    } else if state.checking_auth {
        GuardDecision::Loading
    } else {
        GuardDecision::Redirect("/login")
    }
}

/// Decision for admin-only routes. An authenticated non-admin goes home,
/// not to the login page.
pub fn admin_decision(state: &SessionState) -> GuardDecision {
    match authed_decision(state) {
        GuardDecision::Allow => {
            let is_admin = state
                .user
                .as_ref()
                .is_some_and(|user| user.role == Role::Admin);
            if is_admin {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect("/")
            }
        }
        held => held,
    }
}

/// Decision for login/signup routes: signed-in visitors get sent home.
pub fn guest_decision(state: &SessionState) -> GuardDecision {
    if !state.authenticated || state.user.is_none() {
        GuardDecision::Allow
    } else if state.checking_auth {
        GuardDecision::Loading
    } else {
        GuardDecision::Redirect("/")
    }
}

/// Shared guard shell around one decision function.
fn guarded(decide: fn(&SessionState) -> GuardDecision, children: ChildrenFn) -> impl IntoView {
    let store = SessionStore::expect();
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decide(&store.get()) {
            log::debug!("route guard redirecting to {path}");
            navigate(path, NavigateOptions::default());
        }
    });

    move || match decide(&store.get()) {
        GuardDecision::Allow => children(),
        GuardDecision::Loading => view! { <LoadingScreen/> }.into_any(),
        // The effect above is already navigating; keep the frame quiet
        // until the router swaps the view out.
        GuardDecision::Redirect(_) => view! {
            <div class="gate-screen">
                <p class="gate-screen__label">"Redirecting..."</p>
            </div>
        }
        .into_any(),
    }
}

/// Renders children only for an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(authed_decision, children)
}

/// Renders children only for an authenticated admin.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(admin_decision, children)
}

/// Renders children only while nobody is signed in (login/signup pages).
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    guarded(guest_decision, children)
}
