use std::sync::Arc;
use story_types::{Story, StoryId, UserId};
use tokio::sync::RwLock;

/// In-memory story store, kept in publication order
#[derive(Clone, Default)]
pub struct StoryRepository {
    stories: Arc<RwLock<Vec<Story>>>,
}

impl StoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, story: Story) -> Story {
        self.stories.write().await.push(story.clone());
        story
    }

    pub async fn list(&self) -> Vec<Story> {
        self.stories.read().await.clone()
    }

    pub async fn find_by_id(&self, id: &StoryId) -> Option<Story> {
        self.stories
            .read()
            .await
            .iter()
            .find(|story| &story.id == id)
            .cloned()
    }

    pub async fn exists(&self, id: &StoryId) -> bool {
        self.stories.read().await.iter().any(|story| &story.id == id)
    }

    pub async fn list_by_author(&self, author_id: &UserId) -> Vec<Story> {
        self.stories
            .read()
            .await
            .iter()
            .filter(|story| &story.author.id == author_id)
            .cloned()
            .collect()
    }

    /// Stories whose id passes `keep`, in publication order
    pub async fn list_where<F>(&self, keep: F) -> Vec<Story>
    where
        F: Fn(&StoryId) -> bool,
    {
        self.stories
            .read()
            .await
            .iter()
            .filter(|story| keep(&story.id))
            .cloned()
            .collect()
    }

    /// Delete every story by the author and return their ids
    pub async fn delete_by_author(&self, author_id: &UserId) -> Vec<StoryId> {
        let mut stories = self.stories.write().await;
        let removed = stories
            .iter()
            .filter(|story| &story.author.id == author_id)
            .map(|story| story.id.clone())
            .collect();
        stories.retain(|story| &story.author.id != author_id);
        removed
    }
}
