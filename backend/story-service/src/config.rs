/// Configuration management for Story Service
///
/// Loads configuration from environment variables.
use anyhow::{bail, Context, Result};
use chrono::Duration;
use serde::Deserialize;
use session_token::DEFAULT_TOKEN_TTL_HOURS;

#[derive(Clone, Deserialize)]
pub struct Config {
    /// Application environment (development, staging, production)
    #[serde(default = "default_app_env")]
    pub app_env: String,
    /// HS256 secret used to sign session tokens
    pub jwt_secret: String,
    /// Session token lifetime in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_token_ttl_hours() -> i64 {
    DEFAULT_TOKEN_TTL_HOURS
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let config: Config =
            envy::from_env().context("JWT_SECRET environment variable not set or invalid")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET must not be empty");
        }
        if self.token_ttl_hours <= 0 {
            bail!("TOKEN_TTL_HOURS must be positive, got {}", self.token_ttl_hours);
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        matches!(
            self.app_env.to_ascii_lowercase().as_str(),
            "production" | "prod"
        )
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::hours(self.token_ttl_hours)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_env", &self.app_env)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}
