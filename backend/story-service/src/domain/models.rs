use serde::{Deserialize, Serialize};
use story_types::{User, UserId};
use validator::Validate;

/// Stored user: public profile plus the argon2 password hash
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password_hash: String,
}

/// What "get user by id" exposes to other users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProfile {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub bio: String,
    pub avatar: String,
}

impl From<&User> for PublicProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
}

/// Login by email when present, otherwise by username
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Partial profile update; absent fields keep their value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub bio: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewStory {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Result of removing a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedUser {
    pub stories_removed: usize,
}
