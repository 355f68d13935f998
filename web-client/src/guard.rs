//! Route guard
//!
//! Decides, from the session state alone, whether a protected view may be
//! built. The protected view is passed as a builder so nothing is rendered
//! for visitors who are sent away.

use crate::navigation::Navigator;
use crate::session::{AuthState, SessionUser};
use crate::views::{Placeholder, View};
use tracing::{debug, info};

/// Result of evaluating the guard once
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// Session check still running
    Pending(View),
    /// Children rendered unchanged
    Render(View),
    /// Visitor was sent to this path
    Redirect(String),
}

impl GuardOutcome {
    /// The view to show for this pass, if the guard produced one
    pub fn into_view(self) -> Option<View> {
        match self {
            GuardOutcome::Pending(view) | GuardOutcome::Render(view) => Some(view),
            GuardOutcome::Redirect(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    login_path: String,
}

impl RouteGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn evaluate<F>(&self, state: &AuthState, nav: &mut dyn Navigator, children: F) -> GuardOutcome
    where
        F: FnOnce(&SessionUser) -> View,
    {
        match state {
            AuthState::Unresolved => {
                debug!(path = nav.current_path(), "Waiting for session check");
                GuardOutcome::Pending(View::Loading(Placeholder::Session))
            }
            AuthState::Authenticated(user) => GuardOutcome::Render(children(user)),
            AuthState::Unauthenticated => {
                info!(
                    from = nav.current_path(),
                    to = %self.login_path,
                    "Unauthenticated visitor redirected"
                );
                nav.redirect(&self.login_path);
                GuardOutcome::Redirect(self.login_path.clone())
            }
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new("/login")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryHistory;
    use story_types::UserId;

    /// Counts calls so tests can tell "no navigation" from "no-op redirect"
    #[derive(Default)]
    struct RecordingNavigator {
        path: String,
        pushes: usize,
        redirects: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> &str {
            &self.path
        }

        fn push(&mut self, path: &str) {
            self.pushes += 1;
            self.path = path.to_string();
        }

        fn redirect(&mut self, path: &str) {
            self.redirects.push(path.to_string());
            self.path = path.to_string();
        }
    }

    fn user() -> SessionUser {
        SessionUser {
            id: UserId::from("u1"),
            username: "ada".to_string(),
        }
    }

    #[test]
    fn unresolved_shows_loader_without_navigating() {
        let mut nav = RecordingNavigator {
            path: "/profile".to_string(),
            ..Default::default()
        };
        let mut built = false;

        let outcome = RouteGuard::default().evaluate(&AuthState::Unresolved, &mut nav, |_| {
            built = true;
            View::empty("child")
        });

        assert_eq!(outcome, GuardOutcome::Pending(View::Loading(Placeholder::Session)));
        assert!(!built);
        assert!(nav.redirects.is_empty());
        assert_eq!(nav.pushes, 0);
    }

    #[test]
    fn authenticated_renders_children_unchanged() {
        let mut nav = RecordingNavigator::default();
        let state = AuthState::Authenticated(user());

        let outcome = RouteGuard::default().evaluate(&state, &mut nav, |user| {
            View::empty(&format!("hello {}", user.username))
        });

        assert_eq!(outcome, GuardOutcome::Render(View::empty("hello ada")));
        assert!(nav.redirects.is_empty());
    }

    #[test]
    fn unauthenticated_redirects_once_and_skips_children() {
        let mut nav = RecordingNavigator {
            path: "/profile".to_string(),
            ..Default::default()
        };
        let mut built = false;

        let outcome =
            RouteGuard::new("/login").evaluate(&AuthState::Unauthenticated, &mut nav, |_| {
                built = true;
                View::empty("child")
            });

        assert_eq!(outcome, GuardOutcome::Redirect("/login".to_string()));
        assert!(!built);
        assert_eq!(nav.redirects, vec!["/login"]);
        assert_eq!(nav.pushes, 0);
        assert_eq!(nav.current_path(), "/login");
    }

    #[test]
    fn repeated_evaluation_does_not_grow_history() {
        let mut history = MemoryHistory::new("/");
        history.push("/profile");
        let guard = RouteGuard::default();

        for _ in 0..3 {
            guard.evaluate(&AuthState::Unauthenticated, &mut history, |_| View::empty("child"));
        }

        assert_eq!(history.entries(), ["/", "/login"]);
    }

    #[test]
    fn redirect_has_no_view() {
        assert_eq!(GuardOutcome::Redirect("/login".to_string()).into_view(), None);
        assert!(GuardOutcome::Render(View::empty("x")).into_view().is_some());
    }
}
