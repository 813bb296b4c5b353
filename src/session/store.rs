//! Browser localStorage shim for the persisted session.
//!
//! Two keys under the application namespace hold the bearer token and the
//! serialized user profile. Both must be present and parseable for a
//! session to survive a reload; anything less reads back as absent rather
//! than as an error. No expiry, no encryption, no retries.
//!
//! TRADE-OFFS
//! ==========
//! Corrupt entries silently fall back to the logged-out state. That favors
//! availability on reload over surfacing a condition the user could not
//! act on anyway.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use super::Session;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::User;

const TOKEN_KEY: &str = "@barbershop:token";
const USER_KEY: &str = "@barbershop:user";

/// Assemble a session from raw storage entries.
///
/// Returns `None` unless both entries are present and the user payload
/// parses; never panics and never yields a half-populated session.
#[cfg(any(test, feature = "hydrate"))]
fn decode_session(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token?;
    let user: User = serde_json::from_str(&user_json?).ok()?;
    Some(Session { token, user })
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_user(user: &User) -> Option<String> {
    serde_json::to_string(user).ok()
}

/// Read the persisted session, if any.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user_json = storage.get_item(USER_KEY).ok().flatten();
        let session = decode_session(token, user_json);
        if session.is_none() {
            log::debug!("no persisted session; starting logged out");
        }
        session
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist both session entries. Single-threaded execution makes the pair
/// of writes atomic with respect to a subsequent [`load`].
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Some(user_json) = encode_user(&session.user) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(USER_KEY, &user_json);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove both session entries.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
