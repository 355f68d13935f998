//! Authentication state of the browsing session
//!
//! ```text
//! Unresolved --resolve--> Authenticated | Unauthenticated
//! Authenticated --expire/sign_out--> Unauthenticated
//! any --recheck--> Unresolved
//! ```

use session_token::{peek_claims, Claims, TokenError};
use story_types::UserId;
use tracing::{debug, info, warn};

/// Identity carried by an authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// The session check has not finished yet
    #[default]
    Unresolved,
    Authenticated(SessionUser),
    Unauthenticated,
}

impl AuthState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Unresolved)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Session backed by the token handed out at login.
///
/// The token's signature is the service's concern; the client only checks
/// that a token is present, well formed and not expired. Any failure becomes
/// `Unauthenticated`.
#[derive(Debug, Clone, Default)]
pub struct TokenSession {
    token: Option<String>,
    claims: Option<Claims>,
    state: AuthState,
}

impl TokenSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Finish the session check with whatever token was stored, if any
    pub fn resolve(&mut self, stored: Option<&str>) -> &AuthState {
        let Some(token) = stored else {
            debug!("No stored session token");
            return self.clear();
        };

        match peek_claims(token) {
            Ok(claims) if !claims.sub.trim().is_empty() => {
                info!(user_id = %claims.sub, "Session authenticated");
                self.token = Some(token.to_string());
                self.state = AuthState::Authenticated(SessionUser {
                    id: UserId::new(claims.sub.clone()),
                    username: claims.username.clone(),
                });
                self.claims = Some(claims);
                &self.state
            }
            Ok(_) => {
                warn!("Session token has no subject");
                self.clear()
            }
            Err(TokenError::Expired) => {
                info!("Stored session token expired");
                self.clear()
            }
            Err(e) => {
                warn!(error = %e, "Stored session token rejected");
                self.clear()
            }
        }
    }

    pub fn sign_in(&mut self, token: &str) -> &AuthState {
        self.resolve(Some(token))
    }

    pub fn sign_out(&mut self) -> &AuthState {
        info!("Signed out");
        self.clear()
    }

    /// Start a new check; guarded views wait until `resolve` is called again
    pub fn recheck(&mut self) -> &AuthState {
        self.state = AuthState::Unresolved;
        &self.state
    }

    /// Drop an authenticated session whose token has expired by `now`
    /// (Unix seconds), with the same clock leeway `resolve` allows.
    pub fn expire_if_stale(&mut self, now: i64) -> &AuthState {
        let stale = self.state.user().is_some()
            && self
                .claims
                .as_ref()
                .is_some_and(|claims| claims.is_expired_at(now));
        if stale {
            if let Some(user) = self.state.user() {
                info!(user_id = %user.id, "Session expired");
            }
            return self.clear();
        }
        &self.state
    }

    /// A collaborator failed to confirm the session
    pub fn fail(&mut self, reason: &str) -> &AuthState {
        warn!(reason, "Session check failed");
        self.clear()
    }

    fn clear(&mut self) -> &AuthState {
        self.token = None;
        self.claims = None;
        self.state = AuthState::Unauthenticated;
        &self.state
    }
}
