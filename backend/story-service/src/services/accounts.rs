use crate::domain::models::{
    LoginRequest, LoginResponse, PublicProfile, RegisterRequest, RemovedUser, UpdateUserRequest,
    UserRecord,
};
use crate::error::{ServiceError, ServiceResult};
use crate::repository::{InteractionRepository, StoryRepository, UserRepository};
use crate::services::password::{hash_password, verify_password};
use chrono::Utc;
use regex::RegexBuilder;
use session_token::SessionTokens;
use story_types::{User, UserId};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// Upper bound on compiled search patterns
const SEARCH_PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Account operations: registration, login, profile management, user search
#[derive(Clone)]
pub struct AccountService {
    users: UserRepository,
    stories: StoryRepository,
    interactions: InteractionRepository,
    tokens: SessionTokens,
}

impl AccountService {
    pub fn new(
        users: UserRepository,
        stories: StoryRepository,
        interactions: InteractionRepository,
        tokens: SessionTokens,
    ) -> Self {
        Self {
            users,
            stories,
            interactions,
            tokens,
        }
    }

    pub async fn register_user(&self, request: RegisterRequest) -> ServiceResult<User> {
        request.validate()?;

        let user = User {
            id: UserId::new(Uuid::new_v4().to_string()),
            name: request.name,
            username: request.username,
            email: request.email,
            bio: request.bio,
            avatar: request.avatar,
            created_at: Utc::now(),
        };
        let record = UserRecord {
            user,
            password_hash: hash_password(&request.password)?,
        };

        let user = self.users.insert(record).await?;
        info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    /// Look the user up by email if one was given, otherwise by username,
    /// then check the password and issue a session token.
    pub async fn login_user(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let record = match (request.email.as_deref(), request.username.as_deref()) {
            (Some(email), _) => self.users.find_by_email(email).await,
            (None, Some(username)) => self.users.find_by_username(username).await,
            (None, None) => {
                return Err(ServiceError::InvalidInput(
                    "email or username is required".to_string(),
                ))
            }
        }
        .ok_or_else(ServiceError::user_not_found)?;

        if let Err(err) = verify_password(&request.password, &record.password_hash) {
            warn!(user_id = %record.user.id, "Login rejected");
            return Err(err);
        }

        let token = self
            .tokens
            .issue(record.user.id.as_str(), &record.user.username)?;
        info!(user_id = %record.user.id, "User logged in");

        Ok(LoginResponse {
            user: record.user,
            token,
        })
    }

    pub async fn get_user_by_id(&self, id: &UserId) -> ServiceResult<PublicProfile> {
        self.users
            .find_by_id(id)
            .await
            .map(|record| PublicProfile::from(&record.user))
            .ok_or_else(ServiceError::user_not_found)
    }

    /// Full profile of the signed-in user
    pub async fn current_user(&self, token: &str) -> ServiceResult<User> {
        let claims = self.tokens.validate(token)?;
        self.users
            .find_by_id(&UserId::new(claims.sub))
            .await
            .map(|record| record.user)
            .ok_or_else(ServiceError::user_not_found)
    }

    pub async fn update_user_by_id(
        &self,
        id: &UserId,
        request: UpdateUserRequest,
    ) -> ServiceResult<User> {
        request.validate()?;

        let user = self
            .users
            .update(id, |user| {
                if let Some(name) = request.name {
                    user.name = name;
                }
                if let Some(bio) = request.bio {
                    user.bio = bio;
                }
                if let Some(email) = request.email {
                    user.email = email;
                }
                if let Some(avatar) = request.avatar {
                    user.avatar = avatar;
                }
            })
            .await?;

        info!(user_id = %id, "Updated user");
        Ok(user)
    }

    /// Delete the account together with the user's stories and every
    /// like/save that pointed at them or was made by the user.
    ///
    /// The user table stays locked until the cascade is done, so a
    /// concurrent publish or like by the same user either lands before the
    /// cascade (and is removed by it) or sees the user gone.
    pub async fn remove_user_by_id(&self, id: &UserId) -> ServiceResult<RemovedUser> {
        let users = self.users.lock().await;
        users.delete(id).ok_or_else(ServiceError::user_not_found)?;

        let removed = self.stories.delete_by_author(id).await;
        self.interactions.purge_stories(&removed).await;
        self.interactions.purge_user(id).await;
        drop(users);

        info!(user_id = %id, stories_removed = removed.len(), "Removed user");
        Ok(RemovedUser {
            stories_removed: removed.len(),
        })
    }

    /// Users whose username matches `pattern` (a regular expression, unanchored)
    pub async fn search_users_by_username(&self, pattern: &str) -> ServiceResult<Vec<User>> {
        let regex = RegexBuilder::new(pattern)
            .size_limit(SEARCH_PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| ServiceError::InvalidInput(format!("invalid username pattern: {e}")))?;

        Ok(self.users.search_by_username(&regex).await)
    }
}
