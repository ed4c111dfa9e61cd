//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided app-wide as `RwSignal<AuthState>`. Route guards read it to decide
//! on login redirects; the register, login and profile pages write it after
//! their auth calls complete.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// `true` until the first `/api/auth/me` lookup finishes.
    pub loading: bool,
    /// Set by logout until the root screen mounts; guards stay quiet so the
    /// logout navigation wins. Cleared by [`AuthState::finish_logout`].
    pub signed_out: bool,
}

impl AuthState {
    /// Initial state while the current user is being resolved.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, loading: true, signed_out: false }
    }

    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false, signed_out: false }
    }

    /// State after an explicit logout: no user, nothing pending.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false, signed_out: true }
    }

    /// Apply the result of the initial current-user lookup. Ignored once a
    /// sign-in or logout has already settled the state.
    pub fn resolve(&mut self, user: Option<User>) {
        if !self.loading {
            return;
        }
        self.loading = false;
        self.user = user;
    }

    /// Drop the logout marker once the logout navigation has landed, so
    /// later visits to guarded routes redirect again.
    pub fn finish_logout(&mut self) {
        self.signed_out = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
