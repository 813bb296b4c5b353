//! The session handle: in-memory auth state plus sign-in/sign-out.
//!
//! DESIGN
//! ======
//! [`SessionHandle`] is a cheap `Copy` value created once in `App` and
//! passed to every page and guard that needs it, instead of an ambient
//! context reachable from anywhere. The reactive signal inside is the only
//! owner of in-memory session state; the durable store is read exactly once
//! at construction and written through on every transition.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::{Session, store};
use crate::net::api::{self, ApiError};
use crate::net::types::User;

/// Handle over the current session, passed explicitly as a component prop.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    session: RwSignal<Option<Session>>,
}

impl SessionHandle {
    /// Wrap an already-known session state. Used at construction and in
    /// tests; application code should prefer [`SessionHandle::restore`].
    pub fn new(initial: Option<Session>) -> Self {
        Self { session: RwSignal::new(initial) }
    }

    /// Rehydrate the handle from durable storage. Called once at startup;
    /// the store is never polled afterwards.
    pub fn restore() -> Self {
        Self::new(store::load())
    }

    /// The signed-in user, if any. Reactive: reads inside a tracking scope
    /// re-run when the session changes.
    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    /// The current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.token.clone()))
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    /// Exchange credentials for a session via `POST /sessions`.
    ///
    /// The durable write completes before this future resolves, so a caller
    /// observing success may immediately rely on [`store::load`] and on
    /// [`SessionHandle::token`] reflecting the new session.
    ///
    /// # Errors
    ///
    /// Propagates the underlying [`ApiError`]; no retry is attempted and
    /// both in-memory and durable state are left untouched on failure.
    pub async fn sign_in(self, email: &str, password: &str) -> Result<(), ApiError> {
        let payload = api::create_session(email, password).await?;
        let session = Session::from(payload);
        store::save(&session);
        self.session.set(Some(session));
        Ok(())
    }

    /// Drop the session: clears durable storage, then in-memory state.
    /// Synchronous; afterwards no request helper can be handed a token.
    pub fn sign_out(&self) {
        store::clear();
        self.session.set(None);
    }
}
