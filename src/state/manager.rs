//! Session manager: drives the async auth flows and owns the session.
//!
//! Each flow mirrors one user-visible lifecycle step — startup bootstrap,
//! login, logout, refresh — and is the only place the session container and
//! the persisted token slots are written together.
//!
//! CONCURRENCY
//! ===========
//! Flows take `&mut self`: there is one logical writer, matching the
//! single-threaded event-loop model of the original client. Two overlapping
//! login attempts are not coalesced — whichever resolves last wins. That
//! race is inherited behavior and deliberately not papered over with locks.
//! In-flight flows cannot be cancelled; a caller that loses interest simply
//! drops the future.

use std::sync::Arc;

use crate::services::auth::{AuthBackend, AuthError};
use crate::state::session::Session;
use crate::state::store::{self, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TokenStore};
use crate::types::LoginCredentials;

pub struct SessionManager {
    session: Session,
    auth: Arc<dyn AuthBackend>,
    store: Arc<dyn TokenStore>,
}

impl SessionManager {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthBackend>, store: Arc<dyn TokenStore>) -> Self {
        Self { session: Session::default(), auth, store }
    }

    /// Current session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Startup bootstrap: validate a persisted access token, if any.
    ///
    /// Never surfaces an error — an invalid or expired token means the app
    /// starts signed out, with both persisted slots cleared.
    pub async fn initialize(&mut self) {
        self.session.initialize_pending();

        let Some(token) = self.store.get(ACCESS_TOKEN_KEY) else {
            self.session.initialize_finished(None);
            return;
        };

        match self.auth.validate_token(&token).await {
            Ok(user) => {
                self.session.initialize_finished(Some((user, token)));
            }
            Err(e) => {
                tracing::info!(error = %e, "persisted token rejected, starting signed out");
                store::clear_tokens(self.store.as_ref());
                self.session.initialize_failed();
            }
        }
    }

    /// Log in and persist the fresh token pair.
    ///
    /// # Errors
    ///
    /// Returns the auth failure; the same message is recorded in
    /// `session.error`.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        self.session.login_pending();

        let credentials = LoginCredentials { email: email.into(), password: password.into() };
        match self.auth.login(&credentials).await {
            Ok(response) => {
                self.store.set(ACCESS_TOKEN_KEY, &response.token);
                self.store.set(REFRESH_TOKEN_KEY, &response.refresh_token);
                self.session.login_succeeded(response);
                Ok(())
            }
            Err(e) => {
                self.session.login_failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Log out: best-effort remote notification, then an unconditional local
    /// reset of the session and both persisted slots.
    pub async fn logout(&mut self) {
        self.session.logout_pending();

        if let Err(e) = self.auth.logout().await {
            tracing::warn!(error = %e, "remote logout failed, clearing local session anyway");
        }

        store::clear_tokens(self.store.as_ref());
        self.session.logged_out();
    }

    /// Mint a new access token from the persisted refresh token.
    ///
    /// Any failure — including a missing refresh token — clears both slots
    /// and resets the session, forcing a re-login.
    ///
    /// # Errors
    ///
    /// Returns the refresh failure.
    pub async fn refresh(&mut self) -> Result<(), AuthError> {
        let Some(refresh_token) = self.store.get(REFRESH_TOKEN_KEY) else {
            store::clear_tokens(self.store.as_ref());
            self.session.refresh_failed();
            return Err(AuthError::MissingRefreshToken);
        };

        match self.auth.refresh_token(&refresh_token).await {
            Ok(response) => {
                self.store.set(ACCESS_TOKEN_KEY, &response.token);
                self.session.refresh_succeeded(response.token);
                Ok(())
            }
            Err(e) => {
                store::clear_tokens(self.store.as_ref());
                self.session.refresh_failed();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
