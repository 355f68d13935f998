/// Configuration management for the web client
///
/// Loads configuration from environment variables.
use crate::router::RouteTable;
use anyhow::{bail, Context, Result};
use std::str::FromStr;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Application environment (development, staging, production)
    pub app_env: String,
    /// Route unauthenticated visitors are redirected to
    pub login_path: String,
    pub log_format: LogFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app_env: "development".to_string(),
            login_path: "/login".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(raw) => raw
                .parse::<LogFormat>()
                .map_err(anyhow::Error::msg)
                .context("LOG_FORMAT must be `pretty` or `json`")?,
            Err(_) => defaults.log_format,
        };

        let config = ClientConfig {
            app_env: std::env::var("APP_ENV").unwrap_or(defaults.app_env),
            login_path: std::env::var("LOGIN_PATH").unwrap_or(defaults.login_path),
            log_format,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.login_path.starts_with('/') {
            bail!("LOGIN_PATH must be an absolute path, got {:?}", self.login_path);
        }
        // Redirect target must be a page visitors can see without a session
        match RouteTable::default().resolve(&self.login_path) {
            Some(matched) if !matched.guarded => Ok(()),
            Some(_) => bail!("LOGIN_PATH {:?} is a login-only route", self.login_path),
            None => bail!("LOGIN_PATH {:?} matches no route", self.login_path),
        }
    }
}
