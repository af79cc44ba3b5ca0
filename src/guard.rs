//! Route guard: the single place access decisions are made.
//!
//! `decide` is a pure function of the session and a required-role set; it
//! holds no state and must be re-run on every navigation and every session
//! mutation. Pages render only inside an already-authorized decision and
//! never re-derive authorization themselves.

use crate::state::session::Session;
use crate::types::Role;

/// Outcome of an access check for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session is authorized; mount the view.
    Render,
    /// Not signed in. `from` preserves the requested location so a
    /// successful login can return there.
    RedirectLogin { from: String },
    /// Signed in but the role is not in the route's allowed set.
    RedirectUnauthorized,
    /// Session bootstrap still in flight; show a spinner, decide later.
    ShowLoading,
}

/// Decide whether `session` may render the view at `requested_path`.
///
/// An empty `required_roles` means any authenticated user is allowed.
/// Precedence: loading, then authentication, then role.
#[must_use]
pub fn decide(session: &Session, required_roles: &[Role], requested_path: &str) -> RouteDecision {
    if session.loading {
        return RouteDecision::ShowLoading;
    }
    if !session.authenticated {
        return RouteDecision::RedirectLogin { from: requested_path.into() };
    }
    if !required_roles.is_empty() {
        match session.role() {
            Some(role) if required_roles.contains(&role) => {}
            _ => return RouteDecision::RedirectUnauthorized,
        }
    }
    RouteDecision::Render
}

// =============================================================================
// ROUTE TABLE
// =============================================================================

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Manager, Role::User];
const ADMIN_MANAGER: &[Role] = &[Role::Admin, Role::Manager];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// A named page tagged with its allowed-role set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub allowed_roles: &'static [Role],
}

/// The dashboard's protected pages.
pub const ROUTES: &[RouteConfig] = &[
    RouteConfig { id: "dashboard", label: "Dashboard", path: "/dashboard", allowed_roles: ALL_ROLES },
    RouteConfig { id: "analytics", label: "Analytics", path: "/analytics", allowed_roles: ADMIN_MANAGER },
    RouteConfig { id: "users", label: "User Management", path: "/users", allowed_roles: ADMIN_ONLY },
    RouteConfig { id: "reports", label: "Reports", path: "/reports", allowed_roles: ADMIN_MANAGER },
    RouteConfig { id: "tasks", label: "Tasks", path: "/tasks", allowed_roles: ALL_ROLES },
    RouteConfig { id: "settings", label: "Settings", path: "/settings", allowed_roles: ALL_ROLES },
];

/// Look a path up in the route table.
#[must_use]
pub fn route_for_path(path: &str) -> Option<&'static RouteConfig> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Routes reachable by `role`, in table order.
#[must_use]
pub fn routes_for_role(role: Role) -> Vec<&'static RouteConfig> {
    ROUTES
        .iter()
        .filter(|route| route.allowed_roles.contains(&role))
        .collect()
}

/// Decide access for a path via the route table. Paths outside the table
/// still require authentication but carry no role restriction.
#[must_use]
pub fn decide_route(session: &Session, path: &str) -> RouteDecision {
    let required_roles = route_for_path(path).map_or(&[][..], |route| route.allowed_roles);
    decide(session, required_roles, path)
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
