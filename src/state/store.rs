//! Signal-backed session store provided via context.
//!
//! ARCHITECTURE
//! ============
//! `App` creates one `SessionStore` seeded from sessionStorage and provides
//! it to the whole tree. All mutation happens inside the operations here,
//! which drive the pure transitions in `state::session` and write the
//! durable slice back out after every change to it. Everything else only
//! reads, through `get`/`get_untracked`.

use leptos::prelude::*;

use crate::net::auth_api::{self, AuthApiError};
use crate::state::session::{PersistedSession, SessionState};
use crate::util::persistence;

/// sessionStorage key for the persisted slice.
pub const STORAGE_KEY: &str = "plantdesk.session";

const LOGIN_FALLBACK: &str = "Login failed";
const SIGNUP_FALLBACK: &str = "Signup failed";
const LOGOUT_FALLBACK: &str = "Logout failed";

/// Handle to the session state. `Copy`, so closures capture it freely.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    /// Build the store from whatever the previous page load persisted,
    /// normalized through [`SessionState::from_persisted`].
    pub fn restore() -> Self {
        let slice = persistence::load_json::<PersistedSession>(STORAGE_KEY).unwrap_or_default();
        Self {
            state: RwSignal::new(SessionState::from_persisted(slice)),
        }
    }

    /// Make this store available to the component tree.
    pub fn provide(self) {
        provide_context(self);
    }

    /// The store provided by `App`. Panics when used outside its subtree.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Reactive snapshot of the current state.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Non-tracking snapshot, for event handlers and spawned tasks.
    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    fn update(&self, f: impl FnOnce(&mut SessionState)) {
        self.state.update(f);
    }

    fn persist(&self) {
        persistence::save_json(STORAGE_KEY, &self.get_untracked().persisted());
    }

    /// Fire the page-load auth check.
    ///
    /// The reentrancy gate and the `checking_auth` flip happen synchronously
    /// here, so the boot gate can rely on the flag before the next render;
    /// only the network part runs in a spawned task. Every failure settles as
    /// signed-out with no visible error.
    pub fn start_check(&self) {
        let mut started = false;
        self.update(|s| started = s.begin_check());
        if !started {
            log::debug!("auth check already in flight; skipping");
            return;
        }

        #[cfg(feature = "csr")]
        {
            let store = *self;
            leptos::task::spawn_local(async move {
                let user = match auth_api::check_auth().await {
                    Ok(user) => user,
                    Err(err) => {
                        // Expired cookie, network blip, timeout: all mean
                        // signed out, none are user-facing errors.
                        log::debug!("auth check resolved signed-out: {err}");
                        None
                    }
                };
                store.update(|s| s.finish_check(user));
                store.persist();
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            // No backend off the browser; settle as signed out right away.
            self.update(|s| s.finish_check(None));
            self.persist();
        }
    }

    /// Log in with email + password.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`AuthApiError`] after recording a user-facing
    /// message in `error`, so the login form can stay put and show it.
    pub async fn log_in(&self, email: &str, password: &str) -> Result<(), AuthApiError> {
        self.update(|s| s.begin_request());
        let outcome = match auth_api::log_in(email, password).await {
            Ok(user) => {
                log::info!("login succeeded for role {}", user.role.as_str());
                self.update(|s| s.apply_sign_in(user));
                Ok(())
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                let message = err.credential_message(LOGIN_FALLBACK);
                self.update(|s| s.apply_sign_in_failure(message));
                Err(err)
            }
        };
        self.persist();
        self.update(|s| s.finish_request());
        outcome
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Same contract as [`SessionStore::log_in`].
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthApiError> {
        self.update(|s| s.begin_request());
        let outcome = match auth_api::sign_up(name, email, password).await {
            Ok(user) => {
                log::info!("signup succeeded for role {}", user.role.as_str());
                self.update(|s| s.apply_sign_in(user));
                Ok(())
            }
            Err(err) => {
                log::warn!("signup failed: {err}");
                let message = err.credential_message(SIGNUP_FALLBACK);
                self.update(|s| s.apply_sign_in_failure(message));
                Err(err)
            }
        };
        self.persist();
        self.update(|s| s.finish_request());
        outcome
    }

    /// Log out. The local session is dropped whether or not the server call
    /// goes through, so the client can never keep believing it is signed in.
    ///
    /// # Errors
    ///
    /// Returns the transport error (with `error` set) when the server could
    /// not be told; local state is already signed out by then.
    pub async fn log_out(&self) -> Result<(), AuthApiError> {
        self.update(|s| s.begin_request());
        let result = auth_api::log_out().await;
        self.update(|s| s.clear_session());
        let outcome = match result {
            Ok(()) => Ok(()),
            Err(err) => {
                log::warn!("logout transport failed: {err}");
                let message = err.credential_message(LOGOUT_FALLBACK);
                self.update(|s| s.record_error(message));
                Err(err)
            }
        };
        self.persist();
        self.update(|s| s.finish_request());
        outcome
    }
}
