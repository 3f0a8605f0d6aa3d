//! Root application component: contexts, boot gate, and the guarded routes.
//!
//! ARCHITECTURE
//! ============
//! `App` builds the session store from whatever the previous page load
//! persisted and provides it to the tree. `SessionBoot` then holds the
//! routes back until the first auth check settles, so no guard can redirect
//! a cookie-valid visitor to `/login` during startup. Route-by-route
//! authorization lives entirely in the guard wrappers below.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::boot::SessionBoot;
use crate::components::guards::{GuestOnly, RequireAdmin, RequireAuth};
use crate::pages::admin::{AdminHomePage, AdminUsersPage};
use crate::pages::landing::RoleLanding;
use crate::pages::login::LoginPage;
use crate::pages::module_home::{Area, ModuleHomePage};
use crate::pages::products::ProductsPage;
use crate::pages::profile::ProfilePage;
use crate::pages::settings::SettingsPage;
use crate::pages::signup::SignupPage;
use crate::state::store::SessionStore;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One store for the whole tree, seeded from sessionStorage before the
    // boot gate fires the first check.
    SessionStore::restore().provide();

    view! {
        <Stylesheet id="leptos" href="/pkg/plantdesk.css"/>
        <Title text="Plantdesk"/>

        <Router>
            <SessionBoot>
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RequireAuth><RoleLanding/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <GuestOnly><LoginPage/></GuestOnly> }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| view! { <GuestOnly><SignupPage/></GuestOnly> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RequireAdmin><AdminHomePage/></RequireAdmin> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! { <RequireAdmin><AdminUsersPage/></RequireAdmin> }
                    />
                    <Route
                        path=StaticSegment("npd")
                        view=|| view! { <RequireAuth><ModuleHomePage area=Area::Npd/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("purchase")
                        view=|| view! { <RequireAuth><ModuleHomePage area=Area::Purchase/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("sales")
                        view=|| view! { <RequireAuth><ModuleHomePage area=Area::Sales/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("stores")
                        view=|| view! { <RequireAuth><ModuleHomePage area=Area::Stores/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("planning")
                        view=|| view! { <RequireAuth><ModuleHomePage area=Area::Planning/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("production")
                        view=|| view! { <RequireAuth><ModuleHomePage area=Area::Production/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("quality")
                        view=|| view! { <RequireAuth><ModuleHomePage area=Area::Quality/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("products")
                        view=|| view! { <RequireAuth><ProductsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("settings")
                        view=|| view! { <RequireAuth><SettingsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />
                </Routes>
            </SessionBoot>
        </Router>
    }
}
