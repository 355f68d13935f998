//! Strength check for the HS256 signing secret

use crate::{TokenError, TokenResult};
use std::collections::HashSet;
use tracing::warn;

const MIN_SECRET_LENGTH: usize = 32;
const STRONG_SECRET_LENGTH: usize = 64;
const MIN_DISTINCT_BYTES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretStrength {
    Weak,
    Acceptable,
    Strong,
}

impl SecretStrength {
    pub fn classify(secret: &str) -> Self {
        let bytes = secret.as_bytes();
        let distinct = bytes.iter().collect::<HashSet<_>>().len();

        if bytes.len() < MIN_SECRET_LENGTH || distinct < MIN_DISTINCT_BYTES {
            SecretStrength::Weak
        } else if bytes.len() >= STRONG_SECRET_LENGTH {
            SecretStrength::Strong
        } else {
            SecretStrength::Acceptable
        }
    }
}

/// Weak secrets are fatal in production and a warning elsewhere
pub fn check_secret(secret: &str, production: bool) -> TokenResult<SecretStrength> {
    let strength = SecretStrength::classify(secret);
    if strength == SecretStrength::Weak {
        if production {
            return Err(TokenError::WeakSecret(format!(
                "at least {MIN_SECRET_LENGTH} bytes with {MIN_DISTINCT_BYTES} distinct values required"
            )));
        }
        warn!("JWT secret is weak; acceptable only outside production");
    }
    Ok(strength)
}
