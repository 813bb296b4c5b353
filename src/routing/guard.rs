//! Route guard: render or redirect based on authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route wraps its page in [`Guarded`] so protected views are never
//! reachable while logged out and public-only views (login) are skipped
//! while logged in. The decision itself is a total pure function evaluated
//! reactively on every navigation, never cached.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::auth::SessionHandle;

/// Outcome of evaluating a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// The requested view may render.
    Render,
    /// Send the visitor to the public landing route (login).
    RedirectToLanding,
    /// Send the signed-in user to the authenticated landing route.
    RedirectToDashboard,
}

/// Decide a navigation attempt. Renders iff the route's auth requirement
/// matches the visitor's auth state; the redirect target is chosen by which
/// side of that equality failed.
pub fn decide(requires_auth: bool, user_present: bool) -> RouteDecision {
    if requires_auth == user_present {
        RouteDecision::Render
    } else if requires_auth {
        RouteDecision::RedirectToLanding
    } else {
        RouteDecision::RedirectToDashboard
    }
}

/// Redirect path for a decision, if any. A redirect to the landing route
/// carries the attempted path so a later sign-in can return to it.
pub fn redirect_target(decision: RouteDecision, attempted: &str) -> Option<String> {
    match decision {
        RouteDecision::Render => None,
        RouteDecision::RedirectToLanding => Some(format!("/?from={attempted}")),
        RouteDecision::RedirectToDashboard => Some("/dashboard".to_owned()),
    }
}

/// Wrapper component applying [`decide`] to its children on every route
/// change and auth transition.
#[component]
pub fn Guarded(
    /// Session handle injected by `App`.
    session: SessionHandle,
    /// Whether this route is only for signed-in users.
    #[prop(optional)]
    requires_auth: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        let decision = decide(requires_auth, session.is_authenticated());
        let attempted = location.pathname.get();
        if let Some(target) = redirect_target(decision, &attempted) {
            navigate(&target, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || {
            decide(requires_auth, session.is_authenticated()) == RouteDecision::Render
        }>{children()}</Show>
    }
}
