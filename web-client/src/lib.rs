//! # Web Client
//!
//! Headless core of the Storyfeed client: session state, route guard, route
//! table and the views they render. Views are plain data (`views::View`);
//! drawing them is left to the presentation layer.
//!
//! ## Modules
//! - `annotation`: per-story like/save state for a viewer
//! - `session`: authentication state machine backed by the login token
//! - `guard`: gate in front of login-only routes
//! - `router` / `shell`: path resolution and page assembly
//! - `snapshot`: validated data handed to the views
//! - `views`: feed list, profile tabs, single story, explore

pub mod annotation;
pub mod app;
pub mod config;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod router;
pub mod session;
pub mod shell;
pub mod snapshot;
pub mod telemetry;
pub mod views;

pub use annotation::{annotate, Annotation};
pub use app::WebClient;
pub use config::{ClientConfig, LogFormat};
pub use error::{ClientError, ClientResult};
pub use guard::{GuardOutcome, RouteGuard};
pub use navigation::{MemoryHistory, Navigator};
pub use router::{Route, RouteTable};
pub use session::{AuthState, SessionUser, TokenSession};
pub use shell::{AppShell, ViewSources};
pub use snapshot::{FeedSnapshot, ProfileSnapshot, StorySnapshot};
pub use views::View;
