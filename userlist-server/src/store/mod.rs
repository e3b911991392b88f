//! Storage seam for the users resource
//!
//! Handlers only see [`UserStore`]. Production wires in
//! [`PgUserStore`](crate::db::PgUserStore); tests use [`MemoryUserStore`].

pub mod memory;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::DbError;
use crate::models::{User, UserName};

pub use memory::MemoryUserStore;

/// Users repository
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// All users, ordered by id ascending.
    async fn list_users(&self) -> Result<Vec<User>, DbError>;

    /// Insert one user and return it with its assigned id.
    async fn insert_user(&self, name: UserName) -> Result<User, DbError>;

    /// Liveness probe, bounded by `timeout`.
    async fn ping(&self, timeout: Duration) -> Result<(), DbError>;
}
