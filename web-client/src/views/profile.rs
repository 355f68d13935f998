use super::{render_feed_list, FeedListProps, View};
use crate::snapshot::ProfileSnapshot;
use story_types::{Story, User, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Stories,
    Liked,
    Saved,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Stories, ProfileTab::Liked, ProfileTab::Saved];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Stories => "Stories",
            ProfileTab::Liked => "Liked",
            ProfileTab::Saved => "Saved",
        }
    }

    /// The only thing that differs between tabs
    pub fn select<'a>(&self, snapshot: &'a ProfileSnapshot) -> &'a [Story] {
        match self {
            ProfileTab::Stories => &snapshot.stories,
            ProfileTab::Liked => &snapshot.liked,
            ProfileTab::Saved => &snapshot.saved,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePage {
    pub owner: User,
    pub tabs: [ProfileTab; 3],
    pub active_tab: ProfileTab,
    pub content: Box<View>,
}

/// Profile page with the active tab's stories handed to the feed list
pub fn render_profile(snapshot: &ProfileSnapshot, viewer: &UserId, tab: ProfileTab) -> View {
    let content = render_feed_list(&FeedListProps {
        stories: tab.select(snapshot),
        viewer,
        liked_by: Some(&snapshot.liked_by),
        saved_by: Some(&snapshot.saved_by),
        loading: snapshot.fetching_stories,
    });

    View::Profile(ProfilePage {
        owner: snapshot.owner.clone(),
        tabs: ProfileTab::ALL,
        active_tab: tab,
        content: Box::new(content),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{story, user};
    use crate::views::Placeholder;
    use story_types::{ActionKind, MembershipSet};

    fn snapshot() -> ProfileSnapshot {
        ProfileSnapshot::ready(
            user("u1", "ada"),
            vec![story("s1", "u1"), story("s2", "u1")],
            vec![story("s7", "u9")],
            vec![],
            MembershipSet::from_json(ActionKind::Like, r#"{"s1": ["u1", "u2"], "s7": ["u1"]}"#)
                .unwrap(),
            MembershipSet::new(ActionKind::Save),
        )
        .unwrap()
    }

    #[test]
    fn stories_tab_shows_owner_stories() {
        let view = render_profile(&snapshot(), &UserId::from("u1"), ProfileTab::Stories);

        let View::Profile(page) = &view else {
            panic!("expected profile page, got {view:?}");
        };
        assert_eq!(page.owner.username, "ada");
        assert_eq!(page.active_tab, ProfileTab::Stories);

        let cards = view.feed_cards();
        assert_eq!(cards.len(), 2);
        assert!(cards[0].is_liked());
        assert_eq!(cards[0].like_count(), 2);
        assert!(!cards[1].is_liked());
    }

    #[test]
    fn sibling_tabs_select_other_subsets() {
        let snapshot = snapshot();
        let viewer = UserId::from("u1");

        let liked = render_profile(&snapshot, &viewer, ProfileTab::Liked);
        let keys: Vec<&str> = liked.feed_cards().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["s7"]);

        let saved = render_profile(&snapshot, &viewer, ProfileTab::Saved);
        assert_eq!(saved.text().as_deref(), Some("No Stories"));
    }

    #[test]
    fn fetching_shows_loader_in_every_tab() {
        let snapshot = ProfileSnapshot::loading(user("u1", "ada"));

        for tab in ProfileTab::ALL {
            let View::Profile(page) = render_profile(&snapshot, &UserId::from("u1"), tab) else {
                panic!("expected profile page");
            };
            assert_eq!(*page.content, View::Loading(Placeholder::Stories));
        }
    }
}
