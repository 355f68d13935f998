use crate::error::{ServiceError, ServiceResult};
use crate::repository::{InteractionRepository, StoryRepository, UserRepository};
use story_types::{ActionKind, MembershipSet, StoryId, UserId};
use tracing::debug;

/// Like/save mutations and membership snapshots for the client
#[derive(Clone)]
pub struct InteractionService {
    users: UserRepository,
    stories: StoryRepository,
    interactions: InteractionRepository,
}

impl InteractionService {
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

    pub async fn like(&self, user_id: &UserId, story_id: &StoryId) -> ServiceResult<bool> {
        self.add(ActionKind::Like, user_id, story_id).await
    }

    pub async fn unlike(&self, user_id: &UserId, story_id: &StoryId) -> bool {
        self.interactions
            .remove(ActionKind::Like, story_id, user_id)
            .await
    }

    pub async fn save(&self, user_id: &UserId, story_id: &StoryId) -> ServiceResult<bool> {
        self.add(ActionKind::Save, user_id, story_id).await
    }

    pub async fn unsave(&self, user_id: &UserId, story_id: &StoryId) -> bool {
        self.interactions
            .remove(ActionKind::Save, story_id, user_id)
            .await
    }

    /// Returns true if the membership is new; repeating an action is a no-op.
    /// Both the user and the story must exist.
    async fn add(
        &self,
        kind: ActionKind,
        user_id: &UserId,
        story_id: &StoryId,
    ) -> ServiceResult<bool> {
        let users = self.users.lock().await;
        if !users.exists(user_id) {
            return Err(ServiceError::user_not_found());
        }
        if !self.stories.exists(story_id).await {
            return Err(ServiceError::feed_not_found());
        }

        let created = self
            .interactions
            .add(kind, story_id.clone(), user_id.clone())
            .await;
        drop(users);
        debug!(%kind, %user_id, %story_id, created, "Recorded interaction");
        Ok(created)
    }

    pub async fn is_member(&self, kind: ActionKind, story_id: &StoryId, user_id: &UserId) -> bool {
        self.interactions.contains(kind, story_id, user_id).await
    }

    pub async fn count(&self, kind: ActionKind, story_id: &StoryId) -> usize {
        self.interactions.count(kind, story_id).await
    }

    /// "likedBy" snapshot restricted to the given stories
    pub async fn liked_by(&self, story_ids: &[StoryId]) -> MembershipSet {
        self.interactions
            .snapshot_for(ActionKind::Like, story_ids)
            .await
    }

    /// "savedBy" snapshot restricted to the given stories
    pub async fn saved_by(&self, story_ids: &[StoryId]) -> MembershipSet {
        self.interactions
            .snapshot_for(ActionKind::Save, story_ids)
            .await
    }
}
