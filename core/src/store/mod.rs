//! User storage abstraction

use crate::domain::{User, UserInput};
use crate::error::Result;
use async_trait::async_trait;

pub mod postgres;

pub use postgres::PostgresUserStore;

/// Abstract user store
///
/// Each operation maps to a single statement against the backing storage.
/// Operations scoped to an id return `CoreError::UserNotFound` when no row
/// matches.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; storage assigns the id and both timestamps
    async fn create(&self, input: &UserInput) -> Result<User>;

    /// All users, newest first
    async fn list(&self) -> Result<Vec<User>>;

    /// Fetch a single user
    async fn get(&self, id: i32) -> Result<User>;

    /// Replace name and email, refreshing the update timestamp
    async fn update(&self, id: i32, input: &UserInput) -> Result<User>;

    /// Remove a user
    async fn delete(&self, id: i32) -> Result<()>;
}
