//! Role router: what `/` means for the signed-in user.
//!
//! DESIGN
//! ======
//! One pure function maps the user to a landing surface; the component just
//! renders the result. Missing and unrecognized roles are first-class
//! outcomes with their own page, so a misconfigured account sees an
//! explanation instead of a blank screen.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::access_issue::AccessIssuePage;
use super::admin::AdminHomePage;
use super::dashboard::DashboardPage;
use crate::net::types::{Role, User};
use crate::state::store::SessionStore;

/// Where the root path resolves for one user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Landing {
    /// Render the admin home inline.
    Admin,
    /// Redirect to this module root.
    Module(&'static str),
    /// Render the generic dashboard inline.
    Dashboard,
    /// Render the access-issue surface, carrying the offending role string
    /// when there is one.
    AccessIssue(Option<String>),
}

/// First match wins. Total: every input resolves to a surface.
pub fn landing_for(user: Option<&User>) -> Landing {
    let Some(user) = user else {
        return Landing::AccessIssue(None);
    };
    match &user.role {
        Role::Admin => Landing::Admin,
        Role::Npd => Landing::Module("/npd"),
        Role::Purchase => Landing::Module("/purchase"),
        Role::Sales => Landing::Module("/sales"),
        Role::Stores => Landing::Module("/stores"),
        Role::Planning => Landing::Module("/planning"),
        Role::Production => Landing::Module("/production"),
        Role::Quality => Landing::Module("/quality"),
        // Recognized roles without a module of their own.
        Role::User | Role::Engineer | Role::Material => Landing::Dashboard,
        Role::Unknown(raw) if raw.is_empty() => Landing::AccessIssue(None),
        Role::Unknown(raw) => Landing::AccessIssue(Some(raw.clone())),
    }
}

/// The `/` route body. Mounted inside `RequireAuth`, so a missing user only
/// occurs transiently while a redirect is in flight.
#[component]
pub fn RoleLanding() -> impl IntoView {
    let store = SessionStore::expect();

    move || match landing_for(store.get().user.as_ref()) {
        Landing::Admin => view! { <AdminHomePage/> }.into_any(),
        Landing::Module(path) => view! { <Redirect path=path/> }.into_any(),
        Landing::Dashboard => view! { <DashboardPage/> }.into_any(),
        Landing::AccessIssue(role) => view! { <AccessIssuePage role=role/> }.into_any(),
    }
}
