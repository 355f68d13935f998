//! Route table of the application shell

use std::fmt;
use story_types::StoryId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Feed,
    Profile,
    Story(StoryId),
    Editor,
    Explore,
}

impl Route {
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Feed => "/".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Story(id) => format!("/story/{id}"),
            Route::Editor => "/editor".to_string(),
            Route::Explore => "/explore".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteKind {
    Login,
    Register,
    Feed,
    Profile,
    Story,
    Editor,
    Explore,
}

#[derive(Debug, Clone)]
struct RouteEntry {
    /// Path segments; `:name` matches any single non-empty segment
    segments: Vec<String>,
    kind: RouteKind,
    guarded: bool,
}

impl RouteEntry {
    fn new(pattern: &str, kind: RouteKind, guarded: bool) -> Self {
        Self {
            segments: split(pattern).map(str::to_string).collect(),
            kind,
            guarded,
        }
    }

    fn matches(&self, path: &str) -> Option<Route> {
        let parts: Vec<&str> = split(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut param = None;
        for (segment, part) in self.segments.iter().zip(&parts) {
            if segment.starts_with(':') {
                param = Some(*part);
            } else if segment != part {
                return None;
            }
        }

        let route = match self.kind {
            RouteKind::Login => Route::Login,
            RouteKind::Register => Route::Register,
            RouteKind::Feed => Route::Feed,
            RouteKind::Profile => Route::Profile,
            RouteKind::Story => Route::Story(StoryId::from(param?)),
            RouteKind::Editor => Route::Editor,
            RouteKind::Explore => Route::Explore,
        };
        Some(route)
    }
}

/// Path segments with the query string, fragment and empty segments dropped
fn split(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|segment| !segment.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,
    pub guarded: bool,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.entries.iter().find_map(|entry| {
            entry.matches(path).map(|route| RouteMatch {
                route,
                guarded: entry.guarded,
            })
        })
    }

    pub fn patterns(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| format!("/{}", entry.segments.join("/")))
            .collect()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            entries: vec![
                RouteEntry::new("/login", RouteKind::Login, false),
                RouteEntry::new("/register", RouteKind::Register, false),
                RouteEntry::new("/", RouteKind::Feed, true),
                RouteEntry::new("/profile", RouteKind::Profile, true),
                RouteEntry::new("/story/:id", RouteKind::Story, true),
                RouteEntry::new("/editor", RouteKind::Editor, true),
                RouteEntry::new("/explore", RouteKind::Explore, true),
            ],
        }
    }
}
