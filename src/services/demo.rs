//! Demo-mode credential directory.
//!
//! A fixed in-memory roster used when no real backend is configured. Lookup
//! is by case-insensitive email; passwords are compared in plain text. This
//! exists purely so the dashboard is explorable without a backend.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::types::{Role, User};

/// One demo directory entry.
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub password: &'static str,
    pub user: User,
}

/// Listing entry for the login page's "demo credentials" panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCredential {
    pub role: Role,
    pub email: &'static str,
    pub password: &'static str,
}

fn directory() -> Vec<DemoAccount> {
    vec![
        DemoAccount {
            password: "admin123",
            user: User {
                id: "1".into(),
                email: "admin@enterprise.com".into(),
                first_name: "John".into(),
                last_name: "Administrator".into(),
                role: Role::Admin,
                avatar: None,
                department: Some("IT Administration".into()),
                created_at: "2024-01-01T00:00:00Z".into(),
                last_login: None,
            },
        },
        DemoAccount {
            password: "manager123",
            user: User {
                id: "2".into(),
                email: "manager@enterprise.com".into(),
                first_name: "Sarah".into(),
                last_name: "Manager".into(),
                role: Role::Manager,
                avatar: None,
                department: Some("Operations".into()),
                created_at: "2024-02-15T00:00:00Z".into(),
                last_login: None,
            },
        },
        DemoAccount {
            password: "user123",
            user: User {
                id: "3".into(),
                email: "user@enterprise.com".into(),
                first_name: "Mike".into(),
                last_name: "Employee".into(),
                role: Role::User,
                avatar: None,
                department: Some("Sales".into()),
                created_at: "2024-03-20T00:00:00Z".into(),
                last_login: None,
            },
        },
    ]
}

/// Look up a demo account by email, case-insensitively.
#[must_use]
pub fn lookup(email: &str) -> Option<DemoAccount> {
    let needle = email.trim().to_ascii_lowercase();
    directory()
        .into_iter()
        .find(|account| account.user.email == needle)
}

/// Resolve a token subject id back to a demo user.
#[must_use]
pub fn resolve_subject(id: &str) -> Option<User> {
    directory()
        .into_iter()
        .map(|account| account.user)
        .find(|user| user.id == id)
}

/// The (role, email, password) triples shown on the demo login page.
#[must_use]
pub fn demo_credentials() -> Vec<DemoCredential> {
    vec![
        DemoCredential { role: Role::Admin, email: "admin@enterprise.com", password: "admin123" },
        DemoCredential { role: Role::Manager, email: "manager@enterprise.com", password: "manager123" },
        DemoCredential { role: Role::User, email: "user@enterprise.com", password: "user123" },
    ]
}

/// Current instant as an RFC 3339 string, for `last_login` stamps.
#[must_use]
pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "demo_test.rs"]
mod tests;
