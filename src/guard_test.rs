use super::*;
use crate::types::User;

fn session_with_role(role: Role) -> Session {
    Session {
        user: Some(User {
            id: "1".into(),
            email: "someone@enterprise.com".into(),
            first_name: "Some".into(),
            last_name: "One".into(),
            role,
            avatar: None,
            department: None,
            created_at: "2024-01-01T00:00:00Z".into(),
            last_login: None,
        }),
        token: Some("t".into()),
        refresh_token: Some("r".into()),
        authenticated: true,
        loading: false,
        error: None,
    }
}

// =============================================================================
// decide — precedence
// =============================================================================

#[test]
fn loading_session_shows_loading() {
    let session = Session { loading: true, ..Session::default() };
    assert_eq!(
        decide(&session, &[Role::Admin], "/users"),
        RouteDecision::ShowLoading
    );
}

#[test]
fn loading_wins_even_when_authenticated() {
    let mut session = session_with_role(Role::Admin);
    session.loading = true;
    assert_eq!(decide(&session, &[], "/dashboard"), RouteDecision::ShowLoading);
}

#[test]
fn unauthenticated_redirects_to_login_never_unauthorized() {
    let session = Session::default();
    let decision = decide(&session, &[Role::Admin], "/users");
    assert_eq!(
        decision,
        RouteDecision::RedirectLogin { from: "/users".into() }
    );
}

#[test]
fn redirect_login_preserves_requested_location() {
    let decision = decide(&Session::default(), &[], "/reports");
    let RouteDecision::RedirectLogin { from } = decision else {
        panic!("expected login redirect");
    };
    assert_eq!(from, "/reports");
}

#[test]
fn wrong_role_redirects_to_unauthorized() {
    let session = session_with_role(Role::User);
    assert_eq!(
        decide(&session, &[Role::Admin], "/users"),
        RouteDecision::RedirectUnauthorized
    );
}

#[test]
fn matching_role_renders() {
    let session = session_with_role(Role::Manager);
    assert_eq!(
        decide(&session, &[Role::Admin, Role::Manager], "/analytics"),
        RouteDecision::Render
    );
}

#[test]
fn empty_required_roles_allows_any_authenticated_user() {
    let session = session_with_role(Role::User);
    assert_eq!(decide(&session, &[], "/dashboard"), RouteDecision::Render);
}

#[test]
fn authenticated_session_without_user_is_unauthorized_for_role_gated_routes() {
    // Defensive: authenticated flag set but no user record.
    let session = Session { authenticated: true, ..Session::default() };
    assert_eq!(
        decide(&session, &[Role::Admin], "/users"),
        RouteDecision::RedirectUnauthorized
    );
}

// =============================================================================
// route table
// =============================================================================

#[test]
fn users_route_is_admin_only() {
    let route = route_for_path("/users").unwrap();
    assert_eq!(route.allowed_roles, &[Role::Admin]);
}

#[test]
fn unknown_path_is_not_in_table() {
    assert!(route_for_path("/nope").is_none());
}

#[test]
fn admin_reaches_every_route() {
    assert_eq!(routes_for_role(Role::Admin).len(), ROUTES.len());
}

#[test]
fn user_role_sees_only_ungated_routes() {
    let ids: Vec<&str> = routes_for_role(Role::User).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["dashboard", "tasks", "settings"]);
}

#[test]
fn manager_sees_analytics_and_reports_but_not_users() {
    let ids: Vec<&str> = routes_for_role(Role::Manager).iter().map(|r| r.id).collect();
    assert!(ids.contains(&"analytics"));
    assert!(ids.contains(&"reports"));
    assert!(!ids.contains(&"users"));
}

// =============================================================================
// decide_route
// =============================================================================

#[test]
fn decide_route_gates_users_page_by_table() {
    let session = session_with_role(Role::Manager);
    assert_eq!(
        decide_route(&session, "/users"),
        RouteDecision::RedirectUnauthorized
    );
    assert_eq!(decide_route(&session, "/reports"), RouteDecision::Render);
}

#[test]
fn decide_route_unknown_path_requires_only_authentication() {
    let session = session_with_role(Role::User);
    assert_eq!(decide_route(&session, "/profile"), RouteDecision::Render);
    assert_eq!(
        decide_route(&Session::default(), "/profile"),
        RouteDecision::RedirectLogin { from: "/profile".into() }
    );
}
