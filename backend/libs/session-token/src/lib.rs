//! Session token library for Storyfeed
//!
//! Issues and validates the HS256 session tokens handed out at login.
//!
//! - The story service signs and fully validates tokens with the shared secret.
//! - The web client never holds the secret. It only peeks at the claims to
//!   learn the subject and whether the token has expired; the service remains
//!   the authority on signatures.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

pub mod secret_validation;

pub use secret_validation::{check_secret, SecretStrength};

/// Clock skew tolerance applied to `exp`
const VALIDATION_LEEWAY_SECS: u64 = 30;

/// Default lifetime of a session token
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Failed to sign token: {0}")]
    Signing(String),

    #[error("Weak token secret: {0}")]
    WeakSecret(String),
}

pub type TokenResult<T> = Result<T, TokenError>;

/// Session claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Username at the time of login
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token id
    pub jti: String,
}

impl Claims {
    /// Expiry check with the leeway used by `validate` and `peek_claims`
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp + VALIDATION_LEEWAY_SECS as i64 <= now
    }
}

/// Signs and validates session tokens with a shared secret
#[derive(Clone)]
pub struct SessionTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl SessionTokens {
    pub fn from_secret(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for the user, valid for the configured lifetime
    pub fn issue(&self, user_id: &str, username: &str) -> TokenResult<String> {
        self.issue_with_ttl(user_id, username, self.ttl)
    }

    pub fn issue_with_ttl(&self, user_id: &str, username: &str, ttl: Duration) -> TokenResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature and expiry
    pub fn validate(&self, token: &str) -> TokenResult<Claims> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.leeway = VALIDATION_LEEWAY_SECS;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            warn!(error = %e, "Session token rejected");
            map_jwt_error(e)
        })?;

        if data.claims.sub.trim().is_empty() {
            return Err(TokenError::Invalid("missing subject".to_string()));
        }

        Ok(data.claims)
    }
}

/// Read the claims without verifying the signature.
///
/// Expiry is still enforced. Callers holding no secret (the web client) use
/// this to decide whether a stored token is worth presenting at all.
pub fn peek_claims(token: &str) -> TokenResult<Claims> {
    let mut validation = Validation::new(JWT_ALGORITHM);
    validation.insecure_disable_signature_validation();
    validation.leeway = VALIDATION_LEEWAY_SECS;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(map_jwt_error)?;

    debug!(sub = %data.claims.sub, exp = data.claims.exp, "Peeked session token");
    Ok(data.claims)
}

fn map_jwt_error(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid(err.to_string()),
    }
}
