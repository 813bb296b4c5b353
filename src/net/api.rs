//! REST API helpers for the booking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`ApiError::ServerSide`] since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` so pages decide how a failed
//! exchange degrades. There is no retry or timeout policy here; whatever the
//! browser transport imposes is opaque to this module. A 401 maps to
//! [`ApiError::Unauthorized`] so callers can drop the stale session.
//!
//! Credentials are passed per call and attached as an `Authorization` header
//! when the request is built. No shared client state is mutated, so signing
//! out fully revokes the token.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Appointment, MonthDay, SessionPayload};

/// Failure of one API exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network down, DNS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server rejected the credential; the session is no longer valid.
    #[error("session rejected by server")]
    Unauthorized,
    /// Any other non-success HTTP status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("malformed response body: {0}")]
    Decode(String),
    /// Called during server-side rendering, where no backend is reachable.
    #[error("not available on server")]
    ServerSide,
}

/// Map a non-success HTTP status to its error variant.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Status(status)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn month_availability_endpoint(provider_id: &str, year: i32, month: u32) -> String {
    format!("/providers/{provider_id}/month-availability?year={year}&month={month}")
}

#[cfg(any(test, feature = "hydrate"))]
fn my_appointments_endpoint(year: i32, month: u32, day: u32) -> String {
    format!("/appointments/me?year={year}&month={month}&day={day}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Exchange credentials for a session via `POST /sessions`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails, the server responds with a
/// non-success status, or the body cannot be decoded.
pub async fn create_session(email: &str, password: &str) -> Result<SessionPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/sessions")
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        resp.json::<SessionPayload>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::ServerSide)
    }
}

/// Fetch a provider's month availability via
/// `GET /providers/{id}/month-availability?year&month`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-success status (401 as
/// [`ApiError::Unauthorized`]), or an undecodable body.
pub async fn fetch_month_availability(
    token: &str,
    provider_id: &str,
    year: i32,
    month: u32,
) -> Result<Vec<MonthDay>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = month_availability_endpoint(provider_id, year, month);
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        resp.json::<Vec<MonthDay>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, provider_id, year, month);
        Err(ApiError::ServerSide)
    }
}

/// Fetch the signed-in provider's appointments for one day via
/// `GET /appointments/me?year&month&day`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-success status (401 as
/// [`ApiError::Unauthorized`]), or an undecodable body.
pub async fn fetch_my_appointments(
    token: &str,
    year: i32,
    month: u32,
    day: u32,
) -> Result<Vec<Appointment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = my_appointments_endpoint(year, month, day);
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        resp.json::<Vec<Appointment>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, year, month, day);
        Err(ApiError::ServerSide)
    }
}
