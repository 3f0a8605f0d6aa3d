//! Product catalog shell, reachable by every authenticated role.

use leptos::prelude::*;

use crate::components::topbar::TopBar;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <TopBar title="Products"/>
        <main class="products">
            <h1>"Products"</h1>
            <p class="products__placeholder">"The part catalog loads here."</p>
        </main>
    }
}
