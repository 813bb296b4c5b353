//! Persisted session state and the handle that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` is the durable localStorage shim; `auth` wraps it in the
//! [`auth::SessionHandle`] value that pages and the route guard receive as
//! an explicit prop.

pub mod auth;
pub mod store;

use crate::net::types::{SessionPayload, User};

/// The durable (token, user) pair representing a logged-in identity.
///
/// A session is either fully present or fully absent; a token without a
/// parseable user (or vice versa) is treated as no session at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token attached to authorized requests.
    pub token: String,
    /// Profile of the signed-in user.
    pub user: User,
}

impl From<SessionPayload> for Session {
    fn from(payload: SessionPayload) -> Self {
        Self { token: payload.token, user: payload.user }
    }
}
