//! Users repository backed by Postgres
//!
//! One statement per operation. Query and insert carry no timeout of their
//! own; dropping the request future cancels them.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use super::pool;
use crate::error::DbError;
use crate::models::{User, UserName};
use crate::store::UserStore;

/// Users repository
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::Query)
    }

    async fn insert_user(&self, name: UserName) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("INSERT INTO users (name) VALUES ($1) RETURNING id, name")
            .bind(name.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(DbError::Insert)
    }

    async fn ping(&self, timeout: Duration) -> Result<(), DbError> {
        pool::ping(&self.pool, timeout).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::db::{ensure_schema, DbConfig, PING_TIMEOUT};

    #[tokio::test]
    async fn ping_fails_for_unreachable_host() {
        let config = DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DbConfig::default()
        };
        let store = PgUserStore::new(PgPoolOptions::new().connect_lazy_with(config.connect_options()));

        assert!(store.ping(PING_TIMEOUT).await.is_err());
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p userlist-server -- --ignored

    async fn live_store() -> PgUserStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");
        ensure_schema(&pool).await.expect("schema failed");
        PgUserStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn inserted_user_is_listed_once() {
        let store = live_store().await;
        let marker = format!("it-{}", std::process::id());

        let user = store
            .insert_user(UserName::new(&marker).unwrap())
            .await
            .expect("insert failed");

        let users = store.list_users().await.expect("list failed");
        let matches: Vec<_> = users.iter().filter(|u| u.id == user.id).collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, marker);
        assert!(users.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_inserts_get_distinct_ids() {
        let store = live_store().await;

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    let name = UserName::new(&format!("concurrent-{}", i)).unwrap();
                    store.insert_user(name).await.expect("concurrent insert failed").id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.expect("task panicked"));
        }
        assert_eq!(ids.len(), 20);

        let listed: HashSet<_> = store
            .list_users()
            .await
            .expect("list failed")
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert!(ids.is_subset(&listed));
    }
}
