//! Auth endpoints for the cookie-session backend.
//!
//! Browser builds (csr): real HTTP calls via `gloo-net`, credentials included,
//! each raced against a hard deadline with an abort signal so a hung request
//! cannot pin the UI in a loading state.
//! Native builds: stubs returning `AuthApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure funnels into `AuthApiError`. The session store decides which
//! variants reach the user and which resolve silently to signed-out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

#[cfg(feature = "csr")]
use super::types::AuthEnvelope;
use super::types::User;
use thiserror::Error;

/// Hard deadline for every auth request, in milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Failure modes of the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthApiError {
    /// The deadline elapsed before the server answered; the request was aborted.
    #[error("auth request timed out after {REQUEST_TIMEOUT_MS}ms")]
    Timeout,
    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("auth request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status, or a 2xx that carried no
    /// user where one was required.
    #[error("auth request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The response body did not match the expected envelope shape.
    #[error("auth response could not be decoded: {0}")]
    Decode(String),
    /// Auth calls are browser-only; native builds always land here.
    #[error("auth endpoints are not available outside the browser")]
    Unavailable,
}

impl AuthApiError {
    /// User-facing message for a failed login/signup.
    ///
    /// Server-authored rejection text wins when present; a timeout names
    /// itself; everything else collapses to the operation's generic fallback
    /// so transport internals stay out of the form.
    pub fn credential_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Timeout => "Request timed out. Try again.".to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    let base = option_env!("PLANTDESK_API_BASE").unwrap_or("/api");
    format!("{base}{path}")
}

#[cfg(any(test, feature = "csr"))]
fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "csr"))]
fn signup_payload(name: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "name": name, "email": email, "password": password })
}

/// Build and send one request with credentials, abort wiring, and the
/// deadline race. `body` selects POST-with-JSON vs bare send.
#[cfg(feature = "csr")]
async fn send_request(
    builder: gloo_net::http::RequestBuilder,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, AuthApiError> {
    use futures::future::{Either, select};

    let controller = web_sys::AbortController::new()
        .map_err(|e| AuthApiError::Network(format!("{e:?}")))?;
    let signal = controller.signal();
    let builder = builder
        .credentials(web_sys::RequestCredentials::Include)
        .abort_signal(Some(&signal));
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| AuthApiError::Network(e.to_string()))?;

    let send = request.send();
    let deadline = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    futures::pin_mut!(send);
    futures::pin_mut!(deadline);
    match select(send, deadline).await {
        Either::Left((result, _)) => result.map_err(|e| AuthApiError::Network(e.to_string())),
        Either::Right(((), _)) => {
            controller.abort();
            Err(AuthApiError::Timeout)
        }
    }
}

/// Turn a non-OK response into `Rejected`, salvaging the server's message
/// from the body when there is one.
#[cfg(feature = "csr")]
async fn rejection(response: gloo_net::http::Response) -> AuthApiError {
    let status = response.status();
    let message = response
        .json::<AuthEnvelope>()
        .await
        .ok()
        .and_then(|envelope| envelope.message);
    AuthApiError::Rejected { status, message }
}

#[cfg(feature = "csr")]
async fn read_envelope(response: gloo_net::http::Response) -> Result<AuthEnvelope, AuthApiError> {
    if response.ok() {
        response
            .json::<AuthEnvelope>()
            .await
            .map_err(|e| AuthApiError::Decode(e.to_string()))
    } else {
        Err(rejection(response).await)
    }
}

#[cfg(feature = "csr")]
async fn request_user(
    url: &str,
    payload: &serde_json::Value,
) -> Result<User, AuthApiError> {
    let response = send_request(gloo_net::http::Request::post(url), Some(payload)).await?;
    let status = response.status();
    let envelope = read_envelope(response).await?;
    match envelope.user {
        Some(user) => Ok(user),
        // 2xx without a user is still a refusal for login/signup.
        None => Err(AuthApiError::Rejected {
            status,
            message: envelope.message,
        }),
    }
}

/// Log in via `POST {base}/auth/login`.
///
/// # Errors
///
/// `Rejected` when the server refuses the credentials (its message, if any,
/// rides along); `Timeout`/`Network`/`Decode` for transport failures;
/// `Unavailable` off the browser.
pub async fn log_in(email: &str, password: &str) -> Result<User, AuthApiError> {
    #[cfg(feature = "csr")]
    {
        request_user(&endpoint("/auth/login"), &login_payload(email, password)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(AuthApiError::Unavailable)
    }
}

/// Create an account via `POST {base}/auth/signup`.
///
/// # Errors
///
/// Same contract as [`log_in`].
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<User, AuthApiError> {
    #[cfg(feature = "csr")]
    {
        request_user(
            &endpoint("/auth/signup"),
            &signup_payload(name, email, password),
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, email, password);
        Err(AuthApiError::Unavailable)
    }
}

/// Ask the backend whether the session cookie is still good, via
/// `GET {base}/auth/check-auth`.
///
/// `Ok(None)` is the well-formed "nobody is logged in" answer and is not an
/// error.
///
/// # Errors
///
/// `Rejected` for non-2xx answers, `Timeout`/`Network`/`Decode` for transport
/// failures, `Unavailable` off the browser. Callers treat all of these as
/// signed-out.
pub async fn check_auth() -> Result<Option<User>, AuthApiError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint("/auth/check-auth");
        let response = send_request(gloo_net::http::Request::get(&url), None).await?;
        let envelope = read_envelope(response).await?;
        Ok(envelope.user)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(AuthApiError::Unavailable)
    }
}

/// End the server-side session via `POST {base}/auth/logout`.
///
/// The 2xx body is intentionally ignored; the endpoint guarantees no body
/// contract.
///
/// # Errors
///
/// `Rejected`/`Timeout`/`Network` when the server could not be told;
/// `Unavailable` off the browser. The caller clears local session state
/// either way.
pub async fn log_out() -> Result<(), AuthApiError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint("/auth/logout");
        let response = send_request(gloo_net::http::Request::post(&url), None).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(AuthApiError::Unavailable)
    }
}
