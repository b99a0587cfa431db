/**
 * Session Tokens
 *
 * This module issues and verifies the signed JWTs that act as bearer
 * session tokens. Tokens are self-contained: nothing is stored server-side,
 * so a token stays valid until its embedded expiry passes.
 *
 * The signing secret is handed in at construction. There is no fallback
 * secret; an empty one is a configuration error.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::server::config::ConfigError;

/// Validity window of every issued token, in seconds
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// JWT claims structure
///
/// Serialized as `{email, name, iat, exp}`; the dashboard echoes it back to
/// the client unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the authenticated user
    pub email: String,
    /// Display name of the authenticated user
    pub name: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Identity attributes embedded in a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub name: String,
}

impl Identity {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

/// Token verification and signing failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// Not a structurally valid JWT
    #[error("malformed token")]
    Malformed,
    /// Signed with a different secret or tampered with
    #[error("invalid token signature")]
    InvalidSignature,
    /// `now` is at or after the embedded expiry
    #[error("token expired")]
    Expired,
    /// Signing failed
    #[error("failed to encode token: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies session tokens with a process-wide secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service signing with `secret`
    ///
    /// # Errors
    /// `ConfigError::MissingValue` if the secret is empty.
    pub fn new(secret: &str) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::MissingValue("SECRET_KEY"));
        }
        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(TOKEN_TTL_SECS),
        })
    }

    /// Validity window of issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `identity`, valid from now for [`TOKEN_TTL_SECS`]
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            email: identity.email.clone(),
            name: identity.name.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(TokenError::Encoding)
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`
    ///
    /// The library's own expiry check is disabled: it allows a token through
    /// at exactly `exp`, whereas a token here stops being valid at `exp`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    fn service() -> TokenService {
        TokenService::new("test-secret").unwrap()
    }

    fn alice() -> Identity {
        Identity::new("alice@example.com", "Alice")
    }

    #[test]
    fn test_empty_secret_is_a_config_error() {
        assert_eq!(
            TokenService::new("").unwrap_err(),
            ConfigError::MissingValue("SECRET_KEY")
        );
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service();
        let token = tokens.issue(&alice()).unwrap();
        assert!(!token.is_empty());

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_accepted_throughout_validity_window() {
        let tokens = service();
        let issued = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let token = tokens.issue_at(&alice(), issued).unwrap();

        assert!(tokens.verify_at(&token, issued).is_ok());
        assert!(tokens.verify_at(&token, issued + Duration::minutes(30)).is_ok());
        assert!(tokens
            .verify_at(&token, issued + tokens.ttl() - Duration::seconds(1))
            .is_ok());
    }

    #[test]
    fn test_rejected_at_and_after_expiry() {
        let tokens = service();
        let issued = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let token = tokens.issue_at(&alice(), issued).unwrap();

        assert_matches!(
            tokens.verify_at(&token, issued + tokens.ttl()),
            Err(TokenError::Expired)
        );
        assert_matches!(
            tokens.verify_at(&token, issued + Duration::days(2)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_rejects_token_signed_with_other_secret() {
        let other = TokenService::new("another-secret").unwrap();
        let token = other.issue(&alice()).unwrap();
        assert_matches!(service().verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_verify_invalid_token() {
        assert_matches!(service().verify("invalid.token.here"), Err(TokenError::Malformed));
        assert_matches!(service().verify(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let tokens = service();
        let token = tokens.issue(&alice()).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = tokens.issue(&Identity::new("mallory@example.com", "Mallory")).unwrap();
        let forged_payload = forged.split('.').nth(1).unwrap();
        parts[1] = forged_payload;
        let spliced = parts.join(".");
        assert!(tokens.verify(&spliced).is_err());
    }
}
