//! In-memory users store
//!
//! Mirrors the Postgres table closely enough for handler tests: ids start at
//! 1 and increase by one per insert, listing is ordered by id, and a closed
//! store fails every call with the same error a closed `PgPool` returns.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UserStore;
use crate::error::DbError;
use crate::models::{User, UserName};

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    next_id: i32,
    closed: bool,
    reachable: bool,
}

/// Users kept in a `Vec` behind a lock
#[derive(Debug)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: Vec::new(),
                next_id: 1,
                closed: false,
                reachable: true,
            }),
        }
    }

    /// Fail every subsequent call as if the pool had been closed.
    pub async fn close(&self) {
        self.inner.write().await.closed = true;
    }

    /// When unreachable, pings time out but reads and writes still work.
    pub async fn set_reachable(&self, reachable: bool) {
        self.inner.write().await.reachable = reachable;
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        let inner = self.inner.read().await;
        if inner.closed {
            return Err(DbError::Query(sqlx::Error::PoolClosed));
        }
        Ok(inner.users.clone())
    }

    async fn insert_user(&self, name: UserName) -> Result<User, DbError> {
        let mut inner = self.inner.write().await;
        if inner.closed {
            return Err(DbError::Insert(sqlx::Error::PoolClosed));
        }

        let user = User {
            id: inner.next_id,
            name: name.into_string(),
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn ping(&self, timeout: Duration) -> Result<(), DbError> {
        let inner = self.inner.read().await;
        if inner.closed {
            return Err(DbError::Unavailable(sqlx::Error::PoolClosed));
        }
        if !inner.reachable {
            return Err(DbError::PingTimeout(timeout));
        }
        Ok(())
    }
}
