//! Generic dashboard for roles without a dedicated module.

use leptos::prelude::*;

use crate::components::topbar::TopBar;
use crate::state::store::SessionStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = SessionStore::expect();
    let greeting = move || {
        store
            .get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome, {}", user.name))
    };

    view! {
        <TopBar title="Dashboard"/>
        <main class="dashboard">
            <h1>{greeting}</h1>
            <div class="dashboard__cards">
                <a class="nav-card" href="/products">
                    <span class="nav-card__title">"Products"</span>
                    <span class="nav-card__hint">"Browse the part catalog"</span>
                </a>
                <a class="nav-card" href="/profile">
                    <span class="nav-card__title">"Profile"</span>
                    <span class="nav-card__hint">"Your account details"</span>
                </a>
                <a class="nav-card" href="/settings">
                    <span class="nav-card__title">"Settings"</span>
                    <span class="nav-card__hint">"Preferences"</span>
                </a>
            </div>
        </main>
    }
}
