use crate::domain::models::UserRecord;
use crate::error::{ServiceError, ServiceResult};
use dashmap::DashMap;
use regex::Regex;
use std::sync::Arc;
use story_types::{User, UserId};
use tokio::sync::{Mutex, MutexGuard};

/// In-memory user store
///
/// Email and username are unique. Writes that touch those columns are
/// serialized through `write_lock` so the uniqueness check and the insert
/// happen as one step. `lock` hands the same lock to callers that must not
/// race with account removal.
#[derive(Clone, Default)]
pub struct UserRepository {
    users: Arc<DashMap<UserId, UserRecord>>,
    write_lock: Arc<Mutex<()>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: UserRecord) -> ServiceResult<User> {
        let _guard = self.write_lock.lock().await;

        if self.email_taken(&record.user.email, None) {
            return Err(ServiceError::Conflict("Email already registered".to_string()));
        }
        if self.username_taken(&record.user.username) {
            return Err(ServiceError::Conflict("Username already taken".to_string()));
        }

        let user = record.user.clone();
        self.users.insert(user.id.clone(), record);
        Ok(user)
    }

    pub async fn find_by_id(&self, id: &UserId) -> Option<UserRecord> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    pub async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users
            .iter()
            .find(|entry| entry.user.email.eq_ignore_ascii_case(email))
            .map(|entry| entry.value().clone())
    }

    pub async fn find_by_username(&self, username: &str) -> Option<UserRecord> {
        self.users
            .iter()
            .find(|entry| entry.user.username == username)
            .map(|entry| entry.value().clone())
    }

    /// Apply `update` to the stored profile and return the result
    pub async fn update<F>(&self, id: &UserId, update: F) -> ServiceResult<User>
    where
        F: FnOnce(&mut User),
    {
        let _guard = self.write_lock.lock().await;

        let mut candidate = self
            .users
            .get(id)
            .map(|entry| entry.user.clone())
            .ok_or_else(ServiceError::user_not_found)?;
        update(&mut candidate);

        if self.email_taken(&candidate.email, Some(id)) {
            return Err(ServiceError::Conflict("Email already registered".to_string()));
        }

        let mut entry = self
            .users
            .get_mut(id)
            .ok_or_else(ServiceError::user_not_found)?;
        entry.user = candidate.clone();
        Ok(candidate)
    }

    /// Hold the write lock; no user is added or removed until the returned
    /// handle is dropped.
    pub async fn lock(&self) -> LockedUsers<'_> {
        LockedUsers {
            users: &self.users,
            _guard: self.write_lock.lock().await,
        }
    }

    /// Users whose username matches the pattern, oldest account first
    pub async fn search_by_username(&self, pattern: &Regex) -> Vec<User> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .filter(|entry| pattern.is_match(&entry.user.username))
            .map(|entry| entry.user.clone())
            .collect();
        users.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.username.cmp(&b.username))
        });
        users
    }

    fn email_taken(&self, email: &str, except: Option<&UserId>) -> bool {
        self.users.iter().any(|entry| {
            Some(entry.key()) != except && entry.user.email.eq_ignore_ascii_case(email)
        })
    }

    fn username_taken(&self, username: &str) -> bool {
        self.users.iter().any(|entry| entry.user.username == username)
    }
}

/// User table under the write lock
pub struct LockedUsers<'a> {
    users: &'a DashMap<UserId, UserRecord>,
    _guard: MutexGuard<'a, ()>,
}

impl LockedUsers<'_> {
    pub fn find_by_id(&self, id: &UserId) -> Option<UserRecord> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    pub fn exists(&self, id: &UserId) -> bool {
        self.users.contains_key(id)
    }

    pub fn delete(&self, id: &UserId) -> Option<UserRecord> {
        self.users.remove(id).map(|(_, record)| record)
    }
}
