//! Account settings shell.

use leptos::prelude::*;

use crate::components::topbar::TopBar;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <TopBar title="Settings"/>
        <main class="settings">
            <h1>"Settings"</h1>
            <p class="settings__placeholder">"Preferences load here."</p>
        </main>
    }
}
