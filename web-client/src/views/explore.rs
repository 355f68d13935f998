//! Explore page: user search by username

use super::View;
use story_types::{User, UserId};
use tracing::debug;

pub const EXPLORE_TITLE: &str = "Explore";
pub const SEARCH_PLACEHOLDER: &str = "Search users by username";

/// Search the data collaborator should run for the current query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
}

impl SearchRequest {
    /// Case-insensitive pattern matching the query literally
    pub fn pattern(&self) -> String {
        format!("(?i){}", regex::escape(self.query.trim()))
    }
}

/// One search result in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    pub key: UserId,
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub bio: String,
}

impl From<&User> for UserCard {
    fn from(user: &User) -> Self {
        Self {
            key: user.id.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            avatar: user.avatar.clone(),
            bio: user.bio.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorePage {
    pub title: &'static str,
    pub query: String,
    pub placeholder: &'static str,
    /// Empty grid when there are no results; no message
    pub cards: Vec<UserCard>,
}

/// Query and results of the explore page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploreView {
    query: String,
    results: Vec<User>,
}

impl ExploreView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[User] {
        &self.results
    }

    /// Called on every change of the input. A blank query clears the
    /// results and needs no search.
    pub fn handle_query(&mut self, value: &str) -> Option<SearchRequest> {
        self.query = value.to_string();
        if value.trim().is_empty() {
            self.results.clear();
            return None;
        }
        Some(SearchRequest {
            query: self.query.clone(),
        })
    }

    /// Apply results if they answer the current query. Returns whether they
    /// were applied.
    pub fn receive_results(&mut self, request: &SearchRequest, users: Vec<User>) -> bool {
        if request.query != self.query {
            debug!(
                stale = %request.query,
                current = %self.query,
                "Dropping stale search results"
            );
            return false;
        }
        self.results = users;
        true
    }

    pub fn render(&self) -> View {
        View::Explore(ExplorePage {
            title: EXPLORE_TITLE,
            query: self.query.clone(),
            placeholder: SEARCH_PLACEHOLDER,
            cards: self.results.iter().map(UserCard::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::user;

    fn cards(view: &View) -> &[UserCard] {
        match view {
            View::Explore(page) => &page.cards,
            other => panic!("expected explore page, got {other:?}"),
        }
    }

    #[test]
    fn starts_with_empty_grid() {
        let view = ExploreView::new().render();
        assert!(cards(&view).is_empty());
        assert_eq!(view.text(), None);
    }

    #[test]
    fn every_change_updates_query() {
        let mut explore = ExploreView::new();

        assert_eq!(
            explore.handle_query("a"),
            Some(SearchRequest {
                query: "a".to_string()
            })
        );
        explore.handle_query("ad");

        assert_eq!(explore.query(), "ad");
    }

    #[test]
    fn one_card_per_result() {
        let mut explore = ExploreView::new();
        let request = explore.handle_query("ad").unwrap();

        assert!(explore.receive_results(&request, vec![user("u1", "ada"), user("u2", "adam")]));

        let view = explore.render();
        let keys: Vec<&str> = cards(&view).iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["u1", "u2"]);
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut explore = ExploreView::new();
        let old = explore.handle_query("a").unwrap();
        explore.handle_query("ad");

        assert!(!explore.receive_results(&old, vec![user("u3", "bob")]));
        assert!(explore.results().is_empty());
    }

    #[test]
    fn blank_query_clears_results() {
        let mut explore = ExploreView::new();
        let request = explore.handle_query("ad").unwrap();
        explore.receive_results(&request, vec![user("u1", "ada")]);

        assert_eq!(explore.handle_query("   "), None);
        assert!(cards(&explore.render()).is_empty());
    }

    #[test]
    fn pattern_is_literal() {
        let request = SearchRequest {
            query: " a.b ".to_string(),
        };
        assert_eq!(request.pattern(), r"(?i)a\.b");
    }
}
