use crate::config::Config;
use crate::error::{ServiceError, ServiceResult};
use crate::repository::{InteractionRepository, StoryRepository, UserRepository};
use crate::services::{AccountService, FeedService, InteractionService};
use session_token::{check_secret, SessionTokens};
use tracing::info;

/// All story-service operations over one shared in-memory store
#[derive(Clone)]
pub struct StoryService {
    pub accounts: AccountService,
    pub feeds: FeedService,
    pub interactions: InteractionService,
}

impl StoryService {
    pub fn new(config: &Config) -> ServiceResult<Self> {
        config
            .validate()
            .map_err(|e| ServiceError::Config(e.to_string()))?;
        let strength = check_secret(&config.jwt_secret, config.is_production())?;
        let tokens = SessionTokens::from_secret(&config.jwt_secret, config.token_ttl());

        let users = UserRepository::new();
        let stories = StoryRepository::new();
        let interactions = InteractionRepository::new();

        info!(
            env = %config.app_env,
            token_ttl_hours = config.token_ttl_hours,
            secret_strength = ?strength,
            "Story service initialized"
        );

        Ok(Self {
            accounts: AccountService::new(
                users.clone(),
                stories.clone(),
                interactions.clone(),
                tokens,
            ),
            feeds: FeedService::new(users.clone(), stories.clone(), interactions.clone()),
            interactions: InteractionService::new(users, stories, interactions),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(app_env: &str, secret: &str) -> Config {
        Config {
            app_env: app_env.to_string(),
            jwt_secret: secret.to_string(),
            token_ttl_hours: 24,
        }
    }

    #[test]
    fn test_weak_secret_rejected_in_production() {
        let result = StoryService::new(&config("production", "secret"));
        assert!(matches!(result, Err(ServiceError::Token(_))));
    }

    #[test]
    fn test_weak_secret_tolerated_in_development() {
        assert!(StoryService::new(&config("development", "secret")).is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut zero_ttl = config("development", "k3P9xq2Lw8Zr5Tn1Vb7Yc4Hd6Jf0Gm2Qs8Ua5Ie3Ro9");
        zero_ttl.token_ttl_hours = 0;
        assert!(matches!(
            StoryService::new(&zero_ttl),
            Err(ServiceError::Config(_))
        ));

        assert!(matches!(
            StoryService::new(&config("development", "  ")),
            Err(ServiceError::Config(_))
        ));
    }
}
