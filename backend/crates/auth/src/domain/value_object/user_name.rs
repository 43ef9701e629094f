//! User Name Value Object
//!
//! Display name carried in the user record and embedded in issued tokens.
//! Unlike a login handle there is no uniqueness or reserved-word rule;
//! it only needs to be printable and bounded.

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

use kernel::error::app_error::{AppError, AppResult};

/// Maximum length for a display name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// User display name value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    ///
    /// Input is NFKC-normalized and trimmed. Must be 1..=64 characters
    /// with no control characters.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let normalized: String = name.into().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("Name cannot be empty").with_field("name"));
        }

        if trimmed.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            ))
            .with_field("name"));
        }

        if trimmed.chars().any(|c| c.is_control()) {
            return Err(
                AppError::bad_request("Name contains invalid characters").with_field("name")
            );
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
