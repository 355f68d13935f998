use super::{FeedCard, Placeholder, View, STORY_NOT_FOUND_MESSAGE};
use crate::annotation::annotate;
use crate::snapshot::StorySnapshot;
use story_types::UserId;

/// Single story page (`/story/:id`)
pub fn render_story(snapshot: &StorySnapshot, viewer: &UserId) -> View {
    if snapshot.fetching {
        return View::Loading(Placeholder::Story);
    }

    match &snapshot.story {
        Some(story) => {
            let annotation = annotate(
                &story.id,
                viewer,
                Some(&snapshot.liked_by),
                Some(&snapshot.saved_by),
            );
            View::Story(FeedCard::new(story, annotation))
        }
        None => View::empty(STORY_NOT_FOUND_MESSAGE),
    }
}
