//! User Entity
//!
//! The single durable entity of the service: a registered account with
//! its credential hash. Owned exclusively by the persistence layer.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email,
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name, embedded in issued tokens
    pub name: UserName,
    /// Login identifier (unique, lowercased)
    pub email: Email,
    /// Argon2id hash of the password
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: UserName, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check a submitted password against the stored hash
    pub fn verify_password(&self, raw: &RawPassword) -> bool {
        self.password_hash.verify(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let name = UserName::new("Alice").unwrap();
        let email = Email::new("alice@example.com").unwrap();
        let raw = RawPassword::new("correct horse battery".to_string()).unwrap();
        let hash = UserPassword::from_raw(&raw).unwrap();
        User::new(name, email, hash)
    }

    #[test]
    fn test_new_user_has_v4_id() {
        let user = sample_user();
        assert_eq!(user.user_id.as_uuid().get_version_num(), 4);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_verify_password() {
        let user = sample_user();

        let good = RawPassword::new("correct horse battery".to_string()).unwrap();
        assert!(user.verify_password(&good));

        let bad = RawPassword::new("wrong horse battery".to_string()).unwrap();
        assert!(!user.verify_password(&bad));
    }
}
