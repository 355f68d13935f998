//! # Story Types
//!
//! Shared domain types for the Storyfeed client and story service.
//!
//! ## Modules
//! - `models`: users, stories, identifiers and interaction kinds
//! - `membership`: per-story membership sets for likes and saves

pub mod membership;
pub mod models;

pub use membership::{MembershipMap, MembershipSet};
pub use models::{ActionKind, Author, Story, StoryId, User, UserId};
