//! Session state machine for the signed-in user.
//!
//! DESIGN
//! ======
//! Every transition lives here as a plain method over plain data, so the
//! whole auth lifecycle is testable natively. Signals, sessionStorage, and
//! HTTP stay in `state::store`, which drives these transitions.
//!
//! Lifecycle: `begin_check` → `finish_check` resolves the page-load question
//! ("is the cookie still good?"); `begin_request`/`finish_request` bracket
//! login, signup, and logout, with `apply_sign_in`, `apply_sign_in_failure`,
//! and `clear_session` as their outcomes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Who is signed in, plus in-flight and error flags.
///
/// Invariant: `authenticated` implies `user.is_some()`. Transitions maintain
/// it; [`SessionState::from_persisted`] restores it when a stale or corrupted
/// slice violates it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// The signed-in user, when there is one.
    pub user: Option<User>,
    /// True iff `user` is present and the last check/login/signup succeeded.
    pub authenticated: bool,
    /// True only while a check-auth request is in flight. Doubles as the
    /// reentrancy guard: a second check cannot start while this is set.
    pub checking_auth: bool,
    /// True while a login, signup, or logout request is in flight.
    pub loading: bool,
    /// Last failed operation's user-facing message. Cleared at the start of
    /// every operation.
    pub error: Option<String>,
}

impl SessionState {
    /// Start a check-auth pass. Returns `false` and changes nothing when a
    /// check is already in flight.
    pub fn begin_check(&mut self) -> bool {
        if self.checking_auth {
            return false;
        }
        self.error = None;
        self.checking_auth = true;
        true
    }

    /// Settle a check-auth pass. `Some` means the cookie session is good;
    /// `None` covers every signed-out outcome, including transport failures.
    /// Never records an error: a failed check is the normal logged-out signal.
    pub fn finish_check(&mut self, user: Option<User>) {
        self.authenticated = user.is_some();
        self.user = user;
        self.checking_auth = false;
    }

    /// Prologue shared by login, signup, and logout.
    pub fn begin_request(&mut self) {
        self.error = None;
        self.loading = true;
    }

    /// Epilogue shared by login, signup, and logout; runs on success and
    /// failure alike.
    pub fn finish_request(&mut self) {
        self.loading = false;
    }

    /// A login or signup succeeded.
    pub fn apply_sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.authenticated = true;
    }

    /// A login or signup failed: record the message and force the signed-out
    /// shape.
    pub fn apply_sign_in_failure(&mut self, message: String) {
        self.error = Some(message);
        self.user = None;
        self.authenticated = false;
    }

    /// Drop the local session unconditionally. Logout applies this whether or
    /// not the server call went through, so the client can never keep
    /// believing it is signed in.
    pub fn clear_session(&mut self) {
        self.user = None;
        self.authenticated = false;
        self.checking_auth = false;
    }

    /// Record a failure message without touching the rest of the state
    /// (logout transport failures).
    pub fn record_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Rebuild state from a persisted slice, normalizing the
    /// authenticated-without-user shape a corrupted store can produce.
    /// In-flight flags start false: a fresh page load has no request running.
    #[must_use]
    pub fn from_persisted(slice: PersistedSession) -> Self {
        let PersistedSession {
            user,
            authenticated,
        } = slice;
        if authenticated && user.is_none() {
            log::warn!("persisted session claimed authenticated without a user; resetting");
            return Self::default();
        }
        Self {
            user,
            authenticated,
            ..Self::default()
        }
    }

    /// The slice of this state that survives a reload.
    #[must_use]
    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            authenticated: self.authenticated,
        }
    }
}

/// What gets written to sessionStorage.
///
/// In-flight and error flags are structurally excluded: a reload means no
/// request is in flight, so the type simply does not have them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: Option<User>,
    pub authenticated: bool,
}
