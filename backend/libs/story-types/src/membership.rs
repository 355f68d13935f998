//! Membership sets ("likedBy" / "savedBy")
//!
//! A membership set maps a story id to the ids of the users who performed one
//! kind of action on it. Absence of a story means nobody acted on it.

use crate::models::{ActionKind, StoryId, UserId};
use std::collections::{HashMap, HashSet};

/// Wire form: `{"<storyId>": ["<userId>", ...]}`
pub type MembershipMap = HashMap<StoryId, Vec<UserId>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipSet {
    kind: ActionKind,
    members: HashMap<StoryId, HashSet<UserId>>,
}

impl MembershipSet {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            members: HashMap::new(),
        }
    }

    /// Build from the wire form. Repeated user ids collapse into one member.
    pub fn from_map(kind: ActionKind, map: MembershipMap) -> Self {
        let members = map
            .into_iter()
            .map(|(story_id, users)| (story_id, users.into_iter().collect()))
            .collect();
        Self { kind, members }
    }

    pub fn from_json(kind: ActionKind, json: &str) -> serde_json::Result<Self> {
        let map: MembershipMap = serde_json::from_str(json)?;
        Ok(Self::from_map(kind, map))
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn members(&self, story_id: &StoryId) -> Option<&HashSet<UserId>> {
        self.members.get(story_id)
    }

    pub fn contains(&self, story_id: &StoryId, user_id: &UserId) -> bool {
        self.members
            .get(story_id)
            .map(|users| users.contains(user_id))
            .unwrap_or(false)
    }

    pub fn count(&self, story_id: &StoryId) -> usize {
        self.members.get(story_id).map(HashSet::len).unwrap_or(0)
    }

    /// Returns true if the user was not already a member
    pub fn insert(&mut self, story_id: StoryId, user_id: UserId) -> bool {
        self.members.entry(story_id).or_default().insert(user_id)
    }

    /// Returns true if the user was a member. Empty entries are dropped.
    pub fn remove(&mut self, story_id: &StoryId, user_id: &UserId) -> bool {
        let Some(users) = self.members.get_mut(story_id) else {
            return false;
        };
        let removed = users.remove(user_id);
        if users.is_empty() {
            self.members.remove(story_id);
        }
        removed
    }

    pub fn remove_story(&mut self, story_id: &StoryId) {
        self.members.remove(story_id);
    }

    pub fn remove_user(&mut self, user_id: &UserId) {
        self.members.retain(|_, users| {
            users.remove(user_id);
            !users.is_empty()
        });
    }

    /// Stories the given user acted on, in no particular order
    pub fn stories_of(&self, user_id: &UserId) -> impl Iterator<Item = &StoryId> + '_ {
        let user_id = user_id.clone();
        self.members
            .iter()
            .filter(move |(_, users)| users.contains(&user_id))
            .map(|(story_id, _)| story_id)
    }

    /// Restrict to the given stories
    pub fn subset<'a>(&self, story_ids: impl IntoIterator<Item = &'a StoryId>) -> Self {
        let members = story_ids
            .into_iter()
            .filter_map(|id| self.members.get(id).map(|users| (id.clone(), users.clone())))
            .collect();
        Self {
            kind: self.kind,
            members,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Wire form with user ids sorted for stable output
    pub fn to_map(&self) -> MembershipMap {
        self.members
            .iter()
            .map(|(story_id, users)| {
                let mut users: Vec<UserId> = users.iter().cloned().collect();
                users.sort();
                (story_id.clone(), users)
            })
            .collect()
    }
}
