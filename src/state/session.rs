//! The session container and its transition functions.
//!
//! Exactly one `Session` exists per running client. It starts empty and is
//! mutated only through the named transitions below, one per auth-flow
//! outcome, so each state change is testable without any I/O.

use crate::types::{LoginResponse, Role, User};

/// Process-wide authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Session {
    /// Role of the authenticated user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    // -------------------------------------------------------------------------
    // Login
    // -------------------------------------------------------------------------

    pub fn login_pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn login_succeeded(&mut self, response: LoginResponse) {
        self.loading = false;
        self.authenticated = true;
        self.user = Some(response.user);
        self.token = Some(response.token);
        self.refresh_token = Some(response.refresh_token);
        self.error = None;
    }

    /// Failure leaves any previous tokens untouched; only the error and
    /// loading flag change, and the session stays unauthenticated.
    pub fn login_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    // -------------------------------------------------------------------------
    // Logout
    // -------------------------------------------------------------------------

    pub fn logout_pending(&mut self) {
        self.loading = true;
    }

    /// Logout resets everything regardless of how the remote call went.
    pub fn logged_out(&mut self) {
        *self = Session::default();
    }

    // -------------------------------------------------------------------------
    // Refresh
    // -------------------------------------------------------------------------

    /// Success replaces only the access token; user and refresh token stand.
    pub fn refresh_succeeded(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Any refresh failure forces a re-login.
    pub fn refresh_failed(&mut self) {
        *self = Session::default();
    }

    // -------------------------------------------------------------------------
    // Initialize (startup validation of a persisted token)
    // -------------------------------------------------------------------------

    pub fn initialize_pending(&mut self) {
        self.loading = true;
    }

    /// `restored` is `None` when no token was persisted; the session simply
    /// stops loading and stays signed out.
    pub fn initialize_finished(&mut self, restored: Option<(User, String)>) {
        self.loading = false;
        if let Some((user, token)) = restored {
            self.authenticated = true;
            self.user = Some(user);
            self.token = Some(token);
        }
    }

    /// Validation failure is a silent sign-out, never a surfaced error.
    pub fn initialize_failed(&mut self) {
        self.loading = false;
        self.authenticated = false;
    }

    // -------------------------------------------------------------------------
    // Misc
    // -------------------------------------------------------------------------

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Profile-update stub: overlay new display fields on the current user.
    pub fn update_user(&mut self, first_name: Option<String>, last_name: Option<String>) {
        if let Some(user) = self.user.as_mut() {
            if let Some(first_name) = first_name {
                user.first_name = first_name;
            }
            if let Some(last_name) = last_name {
                user.last_name = last_name;
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
