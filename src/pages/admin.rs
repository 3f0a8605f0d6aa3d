//! Admin pages: the admin home and the user administration shell.

use leptos::prelude::*;

use crate::components::topbar::TopBar;

/// Admin landing with headline stat placeholders. Data wiring belongs to
/// the REST pages outside this crate's scope.
#[component]
pub fn AdminHomePage() -> impl IntoView {
    let stats = [
        ("Users", "—"),
        ("Customers", "—"),
        ("Open orders", "—"),
        ("Production plans", "—"),
    ];

    view! {
        <TopBar title="Admin"/>
        <main class="admin-home">
            <h1>"Plant overview"</h1>
            <div class="admin-home__stats">
                {stats
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__value">{value}</span>
                                <span class="stat-card__label">{label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <nav class="admin-home__links">
                <a class="btn" href="/admin/users">
                    "Manage users"
                </a>
            </nav>
        </main>
    }
}

/// User administration shell.
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <TopBar title="Admin · Users"/>
        <main class="admin-users">
            <h1>"Users"</h1>
            <table class="admin-users__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td colspan="3" class="admin-users__empty">
                            "User records load here."
                        </td>
                    </tr>
                </tbody>
            </table>
        </main>
    }
}
