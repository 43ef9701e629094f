//! Token Service
//!
//! Issues, verifies and refreshes the signed session tokens carried in
//! the `jwt` cookie. Tokens are HS256 JWTs with claims `{name, iat, exp}`;
//! nothing is persisted server-side.
//!
//! Refresh intentionally ignores `exp` and gates on `iat` age instead:
//! the point of refresh is to renew an expired-but-recent token, and the
//! staleness window is the real bound on how long a session can be kept
//! alive without re-entering credentials.

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Claims embedded in every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User's display name
    pub name: String,
    /// Issue time (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds, `iat + token_ttl`)
    pub exp: i64,
}

/// Stateless token issuer/verifier/refresher
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: i64,
    refresh_max_age_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            token_ttl_secs: config.token_ttl_secs(),
            refresh_max_age_secs: config.refresh_max_age_secs(),
        }
    }

    /// Issue a fresh token for the given display name
    pub fn issue(&self, name: &str) -> AuthResult<String> {
        self.issue_at(name, Utc::now().timestamp())
    }

    /// Issue a token with an explicit issue time
    pub(crate) fn issue_at(&self, name: &str, iat: i64) -> AuthResult<String> {
        let claims = TokenClaims {
            name: name.to_string(),
            iat,
            exp: iat + self.token_ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token encoding failed: {e}")))
    }

    /// Validate a token fully (signature and expiry) and return its claims
    pub fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })
    }

    /// Re-issue a token, keeping its name claim
    ///
    /// Rejects tokens with a bad signature and tokens whose `iat` is older
    /// than the refresh window. The new issue time is strictly greater
    /// than the old one, so the returned token string always differs from
    /// the input.
    pub fn refresh(&self, token: &str) -> AuthResult<(String, TokenClaims)> {
        let claims = self.decode_ignoring_expiry(token)?;

        let now = Utc::now().timestamp();
        if claims.iat < now - self.refresh_max_age_secs {
            return Err(AuthError::TokenStale);
        }

        // Monotonic issue time: never reuse the old iat even within the
        // same second.
        let iat = now.max(claims.iat + 1);
        let refreshed = TokenClaims {
            name: claims.name,
            iat,
            exp: iat + self.token_ttl_secs,
        };

        let token = self.issue_at(&refreshed.name, iat)?;

        Ok((token, refreshed))
    }

    /// Signature check only; expiry is the caller's concern
    fn decode_ignoring_expiry(&self, token: &str) -> AuthResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::TokenInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;

    fn service() -> TokenService {
        let config = AuthConfig {
            token_secret: [7u8; 32],
            ..AuthConfig::default()
        };
        TokenService::new(&config)
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = service();
        let token = service.issue("Alice").unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.exp, claims.iat + DAY);
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let service = service();
        let token = service.issue("Alice").unwrap();

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(matches!(
            service.verify(&tampered),
            Err(AuthError::TokenInvalid)
        ));

        // Signed with a different secret
        let other = TokenService::new(&AuthConfig {
            token_secret: [8u8; 32],
            ..AuthConfig::default()
        });
        let foreign = other.issue("Alice").unwrap();
        assert!(matches!(
            service.verify(&foreign),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let service = service();
        let iat = Utc::now().timestamp() - 2 * DAY;
        let token = service.issue_at("Alice", iat).unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_refresh_returns_a_different_token() {
        let service = service();
        let token = service.issue("Alice").unwrap();

        let (refreshed, claims) = service.refresh(&token).unwrap();
        assert_ne!(refreshed, token);
        assert_eq!(claims.name, "Alice");

        // And the refreshed token verifies
        assert!(service.verify(&refreshed).is_ok());
    }

    #[test]
    fn test_refresh_bumps_issue_time() {
        let service = service();
        let iat = Utc::now().timestamp();
        let token = service.issue_at("Alice", iat).unwrap();

        let (_, claims) = service.refresh(&token).unwrap();
        assert!(claims.iat > iat);
        assert_eq!(claims.exp, claims.iat + DAY);
    }

    #[test]
    fn test_refresh_accepts_expired_but_recent_token() {
        let service = service();
        // Two days old: past exp, well inside the 15-day refresh window
        let iat = Utc::now().timestamp() - 2 * DAY;
        let token = service.issue_at("Alice", iat).unwrap();

        let (refreshed, _) = service.refresh(&token).unwrap();
        assert!(service.verify(&refreshed).is_ok());
    }

    #[test]
    fn test_refresh_rejects_stale_token() {
        let service = service();
        // Twenty days old: outside the 15-day refresh window
        let iat = Utc::now().timestamp() - 20 * DAY;
        let token = service.issue_at("Alice", iat).unwrap();

        assert!(matches!(
            service.refresh(&token),
            Err(AuthError::TokenStale)
        ));
    }

    #[test]
    fn test_refresh_rejects_garbage() {
        let service = service();
        assert!(matches!(
            service.refresh("not-a-token"),
            Err(AuthError::TokenInvalid)
        ));
        assert!(matches!(
            service.refresh(""),
            Err(AuthError::TokenInvalid)
        ));
    }
}
