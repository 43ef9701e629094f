//! Refresh Use Case
//!
//! Re-issues the session token carried in the cookie.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::error::{AuthError, AuthResult};

/// Refresh output
pub struct RefreshOutput {
    /// Fresh signed token for the cookie
    pub token: String,
    /// Display name carried over from the old token
    pub name: String,
}

/// Refresh use case
pub struct RefreshUseCase {
    tokens: Arc<TokenService>,
}

impl RefreshUseCase {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Refresh the given cookie value, if any
    pub fn execute(&self, cookie: Option<String>) -> AuthResult<RefreshOutput> {
        let token = cookie.ok_or(AuthError::TokenMissing)?;

        let (token, claims) = self.tokens.refresh(&token)?;

        tracing::info!(name = %claims.name, "Token refreshed");

        Ok(RefreshOutput {
            token,
            name: claims.name,
        })
    }
}
