//! Per-story interaction state derived from membership sets
//!
//! Every function here is total: a missing set, a set of another kind, or a
//! story absent from the set all mean "nobody acted", never an error.

use story_types::{ActionKind, MembershipSet, StoryId, UserId};
use tracing::trace;

/// Like/save state of one story as seen by one viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Annotation {
    pub is_liked: bool,
    pub is_saved: bool,
    pub like_count: usize,
    pub saved_count: usize,
}

fn set_for<'a>(kind: ActionKind, set: Option<&'a MembershipSet>) -> Option<&'a MembershipSet> {
    let set = set?;
    if set.kind() != kind {
        trace!(expected = %kind, actual = %set.kind(), "Membership set kind mismatch");
        return None;
    }
    Some(set)
}

/// True iff `user_id` performed `kind` on `story_id`
pub fn is_member(
    story_id: &StoryId,
    kind: ActionKind,
    set: Option<&MembershipSet>,
    user_id: &UserId,
) -> bool {
    set_for(kind, set)
        .map(|set| set.contains(story_id, user_id))
        .unwrap_or(false)
}

/// Number of users who performed `kind` on `story_id`
pub fn count(story_id: &StoryId, kind: ActionKind, set: Option<&MembershipSet>) -> usize {
    set_for(kind, set).map(|set| set.count(story_id)).unwrap_or(0)
}

pub fn annotate(
    story_id: &StoryId,
    viewer: &UserId,
    liked_by: Option<&MembershipSet>,
    saved_by: Option<&MembershipSet>,
) -> Annotation {
    Annotation {
        is_liked: is_member(story_id, ActionKind::Like, liked_by, viewer),
        is_saved: is_member(story_id, ActionKind::Save, saved_by, viewer),
        like_count: count(story_id, ActionKind::Like, liked_by),
        saved_count: count(story_id, ActionKind::Save, saved_by),
    }
}
