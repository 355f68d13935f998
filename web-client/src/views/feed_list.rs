use super::{FeedCard, Placeholder, View, EMPTY_FEED_MESSAGE};
use crate::annotation::annotate;
use std::collections::HashSet;
use story_types::{MembershipSet, Story, UserId};
use tracing::warn;

/// Inputs of the feed list. Borrowed for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct FeedListProps<'a> {
    pub stories: &'a [Story],
    pub viewer: &'a UserId,
    pub liked_by: Option<&'a MembershipSet>,
    pub saved_by: Option<&'a MembershipSet>,
    pub loading: bool,
}

/// Loading wins over content; an empty list is an explicit empty state.
/// Cards keep input order and each story id appears at most once.
pub fn render_feed_list(props: &FeedListProps<'_>) -> View {
    if props.loading {
        return View::Loading(Placeholder::Stories);
    }
    if props.stories.is_empty() {
        return View::empty(EMPTY_FEED_MESSAGE);
    }

    let mut seen = HashSet::with_capacity(props.stories.len());
    let mut items = Vec::with_capacity(props.stories.len());
    for story in props.stories {
        if !seen.insert(&story.id) {
            warn!(story_id = %story.id, "Skipping duplicate story in feed");
            continue;
        }
        let annotation = annotate(&story.id, props.viewer, props.liked_by, props.saved_by);
        items.push(FeedCard::new(story, annotation));
    }

    View::FeedList { items }
}
