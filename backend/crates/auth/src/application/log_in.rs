//! Log In Use Case
//!
//! Verifies credentials and issues a session token.

use std::sync::Arc;

use crate::application::required;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    /// Email (required; optional here so absence maps to MissingField)
    pub email: Option<String>,
    /// Password (required)
    pub password: Option<String>,
}

/// Log in output
#[derive(Debug)]
pub struct LogInOutput {
    /// Signed token for the cookie
    pub token: String,
    /// User's display name
    pub name: String,
}

/// Log in use case
pub struct LogInUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LogInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        let email = required(input.email, "email")?;
        let password = required(input.password, "password")?;

        // Anything that cannot be a stored credential fails the same way
        // as a wrong password. No user enumeration.
        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw = RawPassword::new(password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.verify_password(&raw) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.name.as_str())?;

        tracing::info!(email = %user.email, "User logged in");

        Ok(LogInOutput {
            token,
            name: user.name.to_string(),
        })
    }
}
