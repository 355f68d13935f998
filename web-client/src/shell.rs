//! Application shell
//!
//! Maps the navigator's current path to a route, runs guarded routes through
//! the `RouteGuard` and builds the page from the data sources.

use crate::config::ClientConfig;
use crate::guard::{GuardOutcome, RouteGuard};
use crate::navigation::Navigator;
use crate::router::{Route, RouteTable};
use crate::session::{AuthState, SessionUser};
use crate::snapshot::{FeedSnapshot, ProfileSnapshot, StorySnapshot};
use crate::views::{
    render_feed_list, render_profile, render_story, ExploreView, FeedListProps, Placeholder,
    ProfileTab, Screen, View,
};
use story_types::{StoryId, UserId};
use tracing::{debug, error};

/// A guard redirect leads to the login route, which is never guarded; more
/// hops than this means the table and the login path disagree.
const MAX_REDIRECTS: usize = 4;

/// Data-fetching collaborator. Failures surface as loading or empty
/// snapshots, never as errors.
pub trait ViewSources {
    fn feed(&self, viewer: &UserId) -> FeedSnapshot;

    /// `None` while the viewer's own profile is still loading
    fn profile(&self, viewer: &UserId) -> Option<ProfileSnapshot>;

    fn story(&self, id: &StoryId, viewer: &UserId) -> StorySnapshot;
}

pub struct AppShell<S> {
    routes: RouteTable,
    guard: RouteGuard,
    sources: S,
    explore: ExploreView,
    profile_tab: ProfileTab,
}

impl<S: ViewSources> AppShell<S> {
    pub fn new(config: &ClientConfig, sources: S) -> Self {
        Self {
            routes: RouteTable::default(),
            guard: RouteGuard::new(config.login_path.clone()),
            sources,
            explore: ExploreView::new(),
            profile_tab: ProfileTab::default(),
        }
    }

    pub fn sources(&self) -> &S {
        &self.sources
    }

    pub fn sources_mut(&mut self) -> &mut S {
        &mut self.sources
    }

    pub fn explore(&self) -> &ExploreView {
        &self.explore
    }

    pub fn explore_mut(&mut self) -> &mut ExploreView {
        &mut self.explore
    }

    pub fn profile_tab(&self) -> ProfileTab {
        self.profile_tab
    }

    pub fn select_profile_tab(&mut self, tab: ProfileTab) {
        self.profile_tab = tab;
    }

    /// Render whatever the navigator points at. A guard redirect is followed
    /// within the same pass, so visitors sent away see the login view.
    pub fn render(&self, auth: &AuthState, nav: &mut dyn Navigator) -> View {
        for _ in 0..=MAX_REDIRECTS {
            let path = nav.current_path().to_string();
            let Some(matched) = self.routes.resolve(&path) else {
                debug!(path = %path, "No route for path");
                return View::NotFound { path };
            };

            if !matched.guarded {
                return self.page(&matched.route, None);
            }

            match self
                .guard
                .evaluate(auth, nav, |user| self.page(&matched.route, Some(user)))
            {
                GuardOutcome::Pending(view) | GuardOutcome::Render(view) => return view,
                GuardOutcome::Redirect(_) => continue,
            }
        }

        error!(
            path = nav.current_path(),
            max = MAX_REDIRECTS,
            "Redirect limit reached"
        );
        View::NotFound {
            path: nav.current_path().to_string(),
        }
    }

    fn page(&self, route: &Route, user: Option<&SessionUser>) -> View {
        match (route, user) {
            (Route::Login, _) => View::Screen(Screen::Login),
            (Route::Register, _) => View::Screen(Screen::Register),
            (Route::Editor, _) => View::Screen(Screen::Editor),
            (Route::Explore, _) => self.explore.render(),
            (Route::Feed, Some(user)) => {
                let snapshot = self.sources.feed(&user.id);
                render_feed_list(&FeedListProps {
                    stories: &snapshot.stories,
                    viewer: &user.id,
                    liked_by: Some(&snapshot.liked_by),
                    saved_by: Some(&snapshot.saved_by),
                    loading: snapshot.fetching,
                })
            }
            (Route::Profile, Some(user)) => match self.sources.profile(&user.id) {
                Some(snapshot) => render_profile(&snapshot, &user.id, self.profile_tab),
                None => View::Loading(Placeholder::Profile),
            },
            (Route::Story(id), Some(user)) => render_story(&self.sources.story(id, &user.id), &user.id),
            (Route::Feed | Route::Profile | Route::Story(_), None) => {
                View::Loading(Placeholder::Session)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryHistory;
    use crate::test_support::story;
    use story_types::{ActionKind, MembershipSet};

    struct Fixed;

    impl ViewSources for Fixed {
        fn feed(&self, _viewer: &UserId) -> FeedSnapshot {
            FeedSnapshot::ready(
                vec![story("s1", "u9"), story("s2", "u9")],
                MembershipSet::from_json(ActionKind::Like, r#"{"s1": ["u1"]}"#).unwrap(),
                MembershipSet::new(ActionKind::Save),
            )
            .unwrap()
        }

        fn profile(&self, _viewer: &UserId) -> Option<ProfileSnapshot> {
            None
        }

        fn story(&self, id: &StoryId, _viewer: &UserId) -> StorySnapshot {
            if id.as_str() == "s1" {
                StorySnapshot::ready(
                    story("s1", "u9"),
                    MembershipSet::new(ActionKind::Like),
                    MembershipSet::new(ActionKind::Save),
                )
            } else {
                StorySnapshot::missing()
            }
        }
    }

    fn shell() -> AppShell<Fixed> {
        AppShell::new(&ClientConfig::default(), Fixed)
    }

    fn signed_in() -> AuthState {
        AuthState::Authenticated(SessionUser {
            id: UserId::from("u1"),
            username: "ada".to_string(),
        })
    }

    #[test]
    fn feed_for_signed_in_viewer() {
        let mut nav = MemoryHistory::new("/");

        let view = shell().render(&signed_in(), &mut nav);

        let cards = view.feed_cards();
        assert_eq!(cards.len(), 2);
        assert!(cards[0].is_liked());
        assert!(!cards[1].is_liked());
    }

    #[test]
    fn guarded_route_sends_visitor_to_login() {
        let mut nav = MemoryHistory::new("/");
        nav.push("/profile");

        let view = shell().render(&AuthState::Unauthenticated, &mut nav);

        assert_eq!(view, View::Screen(Screen::Login));
        assert_eq!(nav.current_path(), "/login");
        assert_eq!(nav.len(), 2);
    }

    #[test]
    fn unresolved_session_waits() {
        let mut nav = MemoryHistory::new("/editor");

        let view = shell().render(&AuthState::Unresolved, &mut nav);

        assert_eq!(view, View::Loading(Placeholder::Session));
        assert_eq!(nav.current_path(), "/editor");
    }

    #[test]
    fn unknown_path_is_not_found_without_guard() {
        let mut nav = MemoryHistory::new("/nowhere");

        let view = shell().render(&AuthState::Unauthenticated, &mut nav);

        assert_eq!(
            view,
            View::NotFound {
                path: "/nowhere".to_string()
            }
        );
        assert_eq!(nav.current_path(), "/nowhere");
    }

    #[test]
    fn story_route_renders_story_or_message() {
        let shell = shell();

        let mut nav = MemoryHistory::new("/story/s1");
        assert!(matches!(shell.render(&signed_in(), &mut nav), View::Story(_)));

        let mut nav = MemoryHistory::new("/story/s404");
        assert_eq!(
            shell.render(&signed_in(), &mut nav).text().as_deref(),
            Some("Story not found")
        );
    }

    #[test]
    fn profile_waits_for_owner() {
        let mut nav = MemoryHistory::new("/profile");
        assert_eq!(
            shell().render(&signed_in(), &mut nav),
            View::Loading(Placeholder::Profile)
        );
    }

    #[test]
    fn guarded_login_path_stops_after_limit() {
        let config = ClientConfig {
            login_path: "/profile".to_string(),
            ..ClientConfig::default()
        };
        let shell = AppShell::new(&config, Fixed);
        let mut nav = MemoryHistory::new("/editor");

        let view = shell.render(&AuthState::Unauthenticated, &mut nav);

        assert!(matches!(view, View::NotFound { .. }));
    }
}
