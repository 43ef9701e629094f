//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token cookie name
    pub cookie_name: String,
    /// Shared secret for HS256 token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Token lifetime (1 day)
    pub token_ttl: Duration,
    /// Maximum age of a token's issue time before refresh is refused (15 days)
    pub refresh_max_age: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "jwt".to_string(),
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(24 * 3600),           // 1 day
            refresh_max_age: Duration::from_secs(15 * 24 * 3600), // 15 days
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Token lifetime in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Refresh age bound in whole seconds
    pub fn refresh_max_age_secs(&self) -> i64 {
        self.refresh_max_age.as_secs() as i64
    }

    /// Cookie settings for the token cookie
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl_secs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_windows() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_secs(), 86_400);
        assert_eq!(config.refresh_max_age_secs(), 15 * 86_400);
        assert_eq!(config.cookie_name, "jwt");
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_cookie_flags() {
        let cookie = AuthConfig::default().cookie().build_set_cookie("t");
        assert!(cookie.starts_with("jwt=t"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
    }

    #[test]
    fn test_random_secret_is_random() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
    }
}
