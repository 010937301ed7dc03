//! Session token issuance and decoding.
//!
//! Sessions are HS256-signed JWTs carrying a [`SessionClaims`] payload. There
//! is no refresh mechanism: a session lives until `exp` and the cookie that
//! carries it expires at the same time.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionClaims {
    /// Subject -- the account id.
    pub sub: String,
    pub email: String,
    pub name: String,
    /// Role name (e.g. `"admin"`).
    pub role: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Outcome of checking a presented session token.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    Valid(SessionClaims),
    /// Malformed, wrongly signed, or missing required claims.
    Invalid,
    /// Correctly signed but `exp` is in the past.
    Expired,
}

/// Configuration for session token generation and validation.
#[derive(Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Session lifetime in hours (default: 24).
    pub expiry_hours: i64,
    /// Whether the session cookie carries the `Secure` attribute.
    pub secure_cookie: bool,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("expiry_hours", &self.expiry_hours)
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}

/// Default session lifetime in hours.
const DEFAULT_EXPIRY_HOURS: i64 = 24;

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                | Required | Default |
    /// |------------------------|----------|---------|
    /// | `JWT_SECRET`           | **yes**  | --      |
    /// | `SESSION_EXPIRY_HOURS` | no       | `24`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env(secure_cookie: bool) -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_hours: i64 = std::env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_HOURS.to_string())
            .parse()
            .expect("SESSION_EXPIRY_HOURS must be a valid i64");

        Self {
            secret,
            expiry_hours,
            secure_cookie,
        }
    }

    /// Session lifetime in seconds, also used as the cookie `Max-Age`.
    pub fn max_age_secs(&self) -> i64 {
        self.expiry_hours * 3600
    }
}

/// Issue a signed session token for an account.
pub fn issue_session_token(
    sub: &str,
    email: &str,
    name: &str,
    role: &str,
    config: &SessionConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: sub.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        iat: now,
        exp: now + config.max_age_secs(),
        jti: Uuid::new_v4().to_string(),
    };
    encode_claims(&claims, config)
}

/// Sign an arbitrary claim set with the configured secret.
pub fn encode_claims(
    claims: &SessionClaims,
    config: &SessionConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify the signature, then the expiry with zero leeway.
///
/// A token whose `exp` is even one second in the past is [`SessionStatus::Expired`].
pub fn decode_session(token: &str, config: &SessionConfig) -> SessionStatus {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked below so an expired token can be told apart from a forged one.
    validation.validate_exp = false;
    validation.leeway = 0;

    let claims = match decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => data.claims,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected session token");
            return SessionStatus::Invalid;
        }
    };

    if claims.exp < chrono::Utc::now().timestamp() {
        SessionStatus::Expired
    } else {
        SessionStatus::Valid(claims)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> SessionConfig {
        SessionConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 24,
            secure_cookie: false,
        }
    }

    fn claims_expiring_at(exp: i64, role: &str) -> SessionClaims {
        SessionClaims {
            sub: "1700000000000".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            role: role.to_string(),
            iat: exp - 60,
            exp,
            jti: Uuid::new_v4().to_string(),
        }
    }

    #[test]
    fn issued_token_decodes_to_valid_claims() {
        let config = test_config();
        let token =
            issue_session_token("42", "admin@example.com", "Admin", "admin", &config).unwrap();

        let claims = assert_matches!(decode_session(&token, &config), SessionStatus::Valid(c) => c);
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn one_second_past_expiry_is_expired() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let token = encode_claims(&claims_expiring_at(now - 1, "admin"), &config).unwrap();

        assert_eq!(decode_session(&token, &config), SessionStatus::Expired);
    }

    #[test]
    fn garbage_token_is_invalid() {
        assert_eq!(
            decode_session("not.a.jwt", &test_config()),
            SessionStatus::Invalid
        );
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let config = test_config();
        let token = issue_session_token("1", "a@b.co", "A", "admin", &config).unwrap();

        let other = SessionConfig {
            secret: "a-completely-different-secret-value".to_string(),
            ..test_config()
        };
        assert_eq!(decode_session(&token, &other), SessionStatus::Invalid);
    }

    #[test]
    fn expired_token_with_wrong_secret_is_invalid() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let token = encode_claims(&claims_expiring_at(now - 3600, "admin"), &config).unwrap();

        let other = SessionConfig {
            secret: "another-secret-entirely-for-this-test".to_string(),
            ..test_config()
        };
        assert_eq!(decode_session(&token, &other), SessionStatus::Invalid);
    }

    #[test]
    fn debug_output_redacts_secret() {
        let debug = format!("{:?}", test_config());
        assert!(!debug.contains("test-secret"));
    }
}
