use super::*;

// =============================================================
// decide: all four (requires_auth, user_present) combinations
// =============================================================

#[test]
fn protected_route_renders_for_signed_in_user() {
    assert_eq!(decide(true, true), RouteDecision::Render);
}

#[test]
fn protected_route_redirects_visitor_to_landing() {
    assert_eq!(decide(true, false), RouteDecision::RedirectToLanding);
}

#[test]
fn public_route_renders_for_visitor() {
    assert_eq!(decide(false, false), RouteDecision::Render);
}

#[test]
fn public_route_redirects_signed_in_user_to_dashboard() {
    assert_eq!(decide(false, true), RouteDecision::RedirectToDashboard);
}

// =============================================================
// redirect targets
// =============================================================

#[test]
fn render_has_no_redirect_target() {
    assert_eq!(redirect_target(RouteDecision::Render, "/dashboard"), None);
}

#[test]
fn landing_redirect_carries_attempted_path() {
    assert_eq!(
        redirect_target(RouteDecision::RedirectToLanding, "/dashboard"),
        Some("/?from=/dashboard".to_owned())
    );
}

#[test]
fn dashboard_redirect_ignores_attempted_path() {
    assert_eq!(
        redirect_target(RouteDecision::RedirectToDashboard, "/"),
        Some("/dashboard".to_owned())
    );
}
