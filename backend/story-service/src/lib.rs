//! # Story Service
//!
//! In-process data and session collaborator for the Storyfeed web client.
//!
//! ## Modules
//! - `services::accounts`: register, login, profile management, user search
//! - `services::feeds`: story listing, lookup and publication
//! - `services::interactions`: likes, saves and membership snapshots

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use state::StoryService;
