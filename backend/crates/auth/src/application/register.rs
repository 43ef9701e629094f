//! Register Use Case
//!
//! Creates a new user account with a hashed password.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::required;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Register output (public view of the created user)
#[derive(Debug)]
pub struct RegisterOutput {
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let name = required(input.name, "name")?;
        let email = required(input.email, "email")?;
        let password = required(input.password, "password")?;

        let name = UserName::new(name).map_err(|e| AuthError::InvalidField {
            field: "name",
            reason: e.message().to_string(),
        })?;
        let email = Email::new(email).map_err(|e| AuthError::InvalidField {
            field: "email",
            reason: e.message().to_string(),
        })?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Validate and hash the password before anything is stored
        let raw = RawPassword::new(password).map_err(|e| AuthError::InvalidField {
            field: "password",
            reason: e.message().to_string(),
        })?;
        let password_hash =
            UserPassword::from_raw(&raw).map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(name, email, password_hash);
        self.user_repo.create(&user).await?;

        tracing::info!(email = %user.email, "User registered");

        Ok(RegisterOutput {
            name: user.name.to_string(),
            email: user.email.to_string(),
            created_at: user.created_at,
        })
    }
}
