use crate::domain::models::NewStory;
use crate::error::{ServiceError, ServiceResult};
use crate::repository::{InteractionRepository, StoryRepository, UserRepository};
use chrono::Utc;
use story_types::{ActionKind, Author, Story, StoryId, UserId};
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

/// Story reads and publication
#[derive(Clone)]
pub struct FeedService {
    users: UserRepository,
    stories: StoryRepository,
    interactions: InteractionRepository,
}

impl FeedService {
    pub fn new(
        users: UserRepository,
        stories: StoryRepository,
        interactions: InteractionRepository,
    ) -> Self {
        Self {
            users,
            stories,
            interactions,
        }
    }

    /// Every story in publication order; empty when nothing was published
    pub async fn list_feeds(&self) -> Vec<Story> {
        let stories = self.stories.list().await;
        debug!(count = stories.len(), "Listed feeds");
        stories
    }

    pub async fn get_feed_by_id(&self, id: &StoryId) -> ServiceResult<Story> {
        self.stories
            .find_by_id(id)
            .await
            .ok_or_else(ServiceError::feed_not_found)
    }

    pub async fn publish_story(&self, author_id: &UserId, draft: NewStory) -> ServiceResult<Story> {
        draft.validate()?;

        // Held until the story is stored so the author cannot be removed
        // in between
        let users = self.users.lock().await;
        let author = users
            .find_by_id(author_id)
            .map(|record| Author::from(&record.user))
            .ok_or_else(ServiceError::user_not_found)?;

        let story = Story {
            id: StoryId::new(Uuid::new_v4().to_string()),
            title: draft.title,
            content: draft.content,
            cover: draft.cover,
            tags: draft.tags,
            author,
            created_at: Utc::now(),
        };

        let story = self.stories.insert(story).await;
        drop(users);
        info!(story_id = %story.id, author_id = %author_id, "Published story");
        Ok(story)
    }

    /// Stories written by the user
    pub async fn stories_by_author(&self, author_id: &UserId) -> Vec<Story> {
        self.stories.list_by_author(author_id).await
    }

    /// Stories the user liked or saved, in publication order
    pub async fn stories_with_action(&self, kind: ActionKind, user_id: &UserId) -> Vec<Story> {
        let ids = self.interactions.story_ids_of(kind, user_id).await;
        self.stories.list_where(|id| ids.contains(id)).await
    }
}
