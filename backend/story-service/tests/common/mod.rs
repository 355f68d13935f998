#![allow(dead_code)]

use story_service::domain::{NewStory, RegisterRequest};
use story_service::{Config, StoryService};
use story_types::{Story, User};

pub const TEST_SECRET: &str = "k3P9xq2Lw8Zr5Tn1Vb7Yc4Hd6Jf0Gm2Qs8Ua5Ie3Ro9";

pub fn test_config() -> Config {
    Config {
        app_env: "test".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl_hours: 24,
    }
}

pub fn service() -> StoryService {
    StoryService::new(&test_config()).expect("service should build")
}

pub fn registration(username: &str) -> RegisterRequest {
    RegisterRequest {
        name: format!("{username} tester"),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "correct horse battery".to_string(),
        bio: String::new(),
        avatar: String::new(),
    }
}

pub async fn register(service: &StoryService, username: &str) -> User {
    service
        .accounts
        .register_user(registration(username))
        .await
        .expect("registration should succeed")
}

pub async fn publish(service: &StoryService, author: &User, title: &str) -> Story {
    service
        .feeds
        .publish_story(
            &author.id,
            NewStory {
                title: title.to_string(),
                content: format!("{title} body"),
                cover: None,
                tags: vec![],
            },
        )
        .await
        .expect("publish should succeed")
}
