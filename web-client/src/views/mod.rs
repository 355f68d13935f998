//! Typed view tree
//!
//! Rendering produces a `View`; drawing it (markup, styling, icons) belongs
//! to the presentation layer.

pub mod explore;
pub mod feed_list;
pub mod profile;
pub mod story;

use crate::annotation::Annotation;
use story_types::{Story, StoryId};

pub use explore::{ExplorePage, ExploreView, SearchRequest, UserCard};
pub use feed_list::{render_feed_list, FeedListProps};
pub use profile::{render_profile, ProfilePage, ProfileTab};
pub use story::render_story;

/// Message shown when a feed has nothing to show
pub const EMPTY_FEED_MESSAGE: &str = "No Stories";

/// Message shown when a story route points at nothing
pub const STORY_NOT_FOUND_MESSAGE: &str = "Story not found";

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading(Placeholder),
    /// Informational empty state, not an error
    Empty { message: String },
    FeedList { items: Vec<FeedCard> },
    Story(FeedCard),
    Profile(ProfilePage),
    Explore(ExplorePage),
    /// Page drawn entirely by the presentation layer
    Screen(Screen),
    NotFound { path: String },
}

impl View {
    pub fn empty(message: &str) -> Self {
        View::Empty {
            message: message.to_string(),
        }
    }

    /// Feed cards anywhere in this view, in render order
    pub fn feed_cards(&self) -> Vec<&FeedCard> {
        match self {
            View::FeedList { items } => items.iter().collect(),
            View::Story(card) => vec![card],
            View::Profile(page) => page.content.feed_cards(),
            _ => Vec::new(),
        }
    }

    /// Text content for empty states and not-found pages
    pub fn text(&self) -> Option<String> {
        match self {
            View::Empty { message } => Some(message.clone()),
            View::NotFound { path } => Some(format!("No page at {path}")),
            View::Profile(page) => page.content.text(),
            _ => None,
        }
    }
}

/// Loading placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Waiting for the session check
    Session,
    /// Feed skeleton
    Stories,
    Story,
    Profile,
}

/// Pages with no data of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Editor,
}

/// One rendered story, keyed by its id
#[derive(Debug, Clone, PartialEq)]
pub struct FeedCard {
    pub key: StoryId,
    pub story: Story,
    pub annotation: Annotation,
}

impl FeedCard {
    pub fn new(story: &Story, annotation: Annotation) -> Self {
        Self {
            key: story.id.clone(),
            story: story.clone(),
            annotation,
        }
    }

    pub fn is_liked(&self) -> bool {
        self.annotation.is_liked
    }

    pub fn is_saved(&self) -> bool {
        self.annotation.is_saved
    }

    pub fn like_count(&self) -> usize {
        self.annotation.like_count
    }

    pub fn saved_count(&self) -> usize {
        self.annotation.saved_count
    }
}
