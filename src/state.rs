//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the auth backend client and the cookie policy; there is no
//! server-side session store because the tokens live in cookies.

use std::sync::Arc;

use crate::services::gotrue::GoTrueClient;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub gotrue: Arc<GoTrueClient>,
    /// Mark session cookies `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(gotrue: GoTrueClient, cookie_secure: bool) -> Self {
        Self { gotrue: Arc::new(gotrue), cookie_secure }
    }
}
