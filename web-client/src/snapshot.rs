//! Data boundary
//!
//! Payloads from the data collaborator are parsed and checked here, once,
//! so views only ever see well-formed snapshots. A `null` membership map is
//! the same as an empty one.

use crate::error::{ClientError, ClientResult};
use serde::Deserialize;
use std::collections::HashSet;
use story_types::{ActionKind, MembershipMap, MembershipSet, Story, User};
use tracing::warn;

fn membership(kind: ActionKind, map: Option<MembershipMap>) -> MembershipSet {
    map.map(|map| MembershipSet::from_map(kind, map))
        .unwrap_or_else(|| MembershipSet::new(kind))
}

fn ensure_unique(stories: &[Story]) -> ClientResult<()> {
    let mut seen = HashSet::with_capacity(stories.len());
    for story in stories {
        if !seen.insert(&story.id) {
            warn!(story_id = %story.id, "Rejected snapshot with duplicate story");
            return Err(ClientError::DuplicateStory(story.id.clone()));
        }
    }
    Ok(())
}

// ============================================================================
// Feed
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub stories: Vec<Story>,
    pub liked_by: MembershipSet,
    pub saved_by: MembershipSet,
    pub fetching: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedPayload {
    #[serde(default)]
    stories: Vec<Story>,
    #[serde(default)]
    liked_by: Option<MembershipMap>,
    #[serde(default)]
    saved_by: Option<MembershipMap>,
    #[serde(default)]
    fetching_stories: bool,
}

impl FeedSnapshot {
    pub fn loading() -> Self {
        Self {
            stories: Vec::new(),
            liked_by: MembershipSet::new(ActionKind::Like),
            saved_by: MembershipSet::new(ActionKind::Save),
            fetching: true,
        }
    }

    pub fn ready(
        stories: Vec<Story>,
        liked_by: MembershipSet,
        saved_by: MembershipSet,
    ) -> ClientResult<Self> {
        ensure_unique(&stories)?;
        Ok(Self {
            stories,
            liked_by,
            saved_by,
            fetching: false,
        })
    }

    pub fn from_json(json: &str) -> ClientResult<Self> {
        let payload: FeedPayload = serde_json::from_str(json)?;
        ensure_unique(&payload.stories)?;
        Ok(Self {
            stories: payload.stories,
            liked_by: membership(ActionKind::Like, payload.liked_by),
            saved_by: membership(ActionKind::Save, payload.saved_by),
            fetching: payload.fetching_stories,
        })
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Everything the profile tabs draw from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub owner: User,
    /// Stories written by the owner
    pub stories: Vec<Story>,
    /// Stories the owner liked
    pub liked: Vec<Story>,
    /// Stories the owner saved
    pub saved: Vec<Story>,
    pub liked_by: MembershipSet,
    pub saved_by: MembershipSet,
    pub fetching_stories: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfilePayload {
    user: User,
    #[serde(default)]
    stories: Vec<Story>,
    #[serde(default)]
    liked: Vec<Story>,
    #[serde(default)]
    saved: Vec<Story>,
    #[serde(default)]
    liked_by: Option<MembershipMap>,
    #[serde(default)]
    saved_by: Option<MembershipMap>,
    #[serde(default)]
    fetching_stories: bool,
}

impl ProfileSnapshot {
    /// Owner known, stories still on their way
    pub fn loading(owner: User) -> Self {
        Self {
            owner,
            stories: Vec::new(),
            liked: Vec::new(),
            saved: Vec::new(),
            liked_by: MembershipSet::new(ActionKind::Like),
            saved_by: MembershipSet::new(ActionKind::Save),
            fetching_stories: true,
        }
    }

    pub fn ready(
        owner: User,
        stories: Vec<Story>,
        liked: Vec<Story>,
        saved: Vec<Story>,
        liked_by: MembershipSet,
        saved_by: MembershipSet,
    ) -> ClientResult<Self> {
        ensure_unique(&stories)?;
        ensure_unique(&liked)?;
        ensure_unique(&saved)?;
        Ok(Self {
            owner,
            stories,
            liked,
            saved,
            liked_by,
            saved_by,
            fetching_stories: false,
        })
    }

    pub fn from_json(json: &str) -> ClientResult<Self> {
        let payload: ProfilePayload = serde_json::from_str(json)?;
        ensure_unique(&payload.stories)?;
        ensure_unique(&payload.liked)?;
        ensure_unique(&payload.saved)?;
        Ok(Self {
            owner: payload.user,
            stories: payload.stories,
            liked: payload.liked,
            saved: payload.saved,
            liked_by: membership(ActionKind::Like, payload.liked_by),
            saved_by: membership(ActionKind::Save, payload.saved_by),
            fetching_stories: payload.fetching_stories,
        })
    }
}

// ============================================================================
// Single story
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorySnapshot {
    /// `None` once fetching finished means the story does not exist
    pub story: Option<Story>,
    pub liked_by: MembershipSet,
    pub saved_by: MembershipSet,
    pub fetching: bool,
}

impl StorySnapshot {
    pub fn loading() -> Self {
        Self {
            story: None,
            liked_by: MembershipSet::new(ActionKind::Like),
            saved_by: MembershipSet::new(ActionKind::Save),
            fetching: true,
        }
    }

    pub fn missing() -> Self {
        Self {
            fetching: false,
            ..Self::loading()
        }
    }

    pub fn ready(story: Story, liked_by: MembershipSet, saved_by: MembershipSet) -> Self {
        Self {
            story: Some(story),
            liked_by,
            saved_by,
            fetching: false,
        }
    }
}
