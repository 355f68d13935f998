use std::sync::Arc;
use story_types::{ActionKind, MembershipSet, StoryId, UserId};
use tokio::sync::RwLock;

/// Like and save memberships
///
/// Both operations are idempotent: liking twice leaves one like.
#[derive(Clone)]
pub struct InteractionRepository {
    likes: Arc<RwLock<MembershipSet>>,
    saves: Arc<RwLock<MembershipSet>>,
}

impl Default for InteractionRepository {
    fn default() -> Self {
        Self {
            likes: Arc::new(RwLock::new(MembershipSet::new(ActionKind::Like))),
            saves: Arc::new(RwLock::new(MembershipSet::new(ActionKind::Save))),
        }
    }
}

impl InteractionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, kind: ActionKind) -> &RwLock<MembershipSet> {
        match kind {
            ActionKind::Like => &*self.likes,
            ActionKind::Save => &*self.saves,
        }
    }

    /// Returns true if this created a new membership
    pub async fn add(&self, kind: ActionKind, story_id: StoryId, user_id: UserId) -> bool {
        self.set(kind).write().await.insert(story_id, user_id)
    }

    /// Returns true if a membership was removed
    pub async fn remove(&self, kind: ActionKind, story_id: &StoryId, user_id: &UserId) -> bool {
        self.set(kind).write().await.remove(story_id, user_id)
    }

    pub async fn contains(&self, kind: ActionKind, story_id: &StoryId, user_id: &UserId) -> bool {
        self.set(kind).read().await.contains(story_id, user_id)
    }

    pub async fn count(&self, kind: ActionKind, story_id: &StoryId) -> usize {
        self.set(kind).read().await.count(story_id)
    }

    /// Copy restricted to the given stories
    pub async fn snapshot_for(&self, kind: ActionKind, story_ids: &[StoryId]) -> MembershipSet {
        self.set(kind).read().await.subset(story_ids.iter())
    }

    pub async fn story_ids_of(&self, kind: ActionKind, user_id: &UserId) -> Vec<StoryId> {
        self.set(kind)
            .read()
            .await
            .stories_of(user_id)
            .cloned()
            .collect()
    }

    pub async fn purge_stories(&self, story_ids: &[StoryId]) {
        for kind in [ActionKind::Like, ActionKind::Save] {
            let mut set = self.set(kind).write().await;
            for id in story_ids {
                set.remove_story(id);
            }
        }
    }

    pub async fn purge_user(&self, user_id: &UserId) {
        for kind in [ActionKind::Like, ActionKind::Save] {
            self.set(kind).write().await.remove_user(user_id);
        }
    }
}
