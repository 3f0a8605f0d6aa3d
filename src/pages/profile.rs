//! Profile page rendering the session user's own record.

use leptos::prelude::*;

use crate::components::topbar::TopBar;
use crate::state::store::SessionStore;

const EMPTY_FIELD: &str = "Not set";

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = SessionStore::expect();

    view! {
        <TopBar title="Profile"/>
        <main class="profile">
            {move || {
                store
                    .get()
                    .user
                    .map(|user| {
                        let role = user.role.as_str().to_owned();
                        let rows = [
                            ("Email", Some(user.email)),
                            ("Role", Some(role)),
                            ("Phone", user.phone),
                            ("Company", user.company_name),
                            ("Department", user.department),
                            ("Location", user.location),
                        ];
                        view! {
                            <h1>{user.name}</h1>
                            <dl class="profile__rows">
                                {rows
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <dt>{label}</dt>
                                            <dd>{value.unwrap_or_else(|| EMPTY_FIELD.to_owned())}</dd>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </dl>
                            {user.bio.map(|bio| view! { <p class="profile__bio">{bio}</p> })}
                        }
                    })
            }}
        </main>
    }
}
