//! Persistence for `user_data`: one row per user, single-field upserts.
//!
//! `AppState` holds an `Arc<dyn UserDataStore>`: Postgres in production,
//! in-memory when no `DATABASE_URL` is configured.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::user_data::models::{UserDataField, UserDataRow};

#[async_trait]
pub trait UserDataStore: Send + Sync {
    /// The user's row, if one has been written.
    async fn load(&self, user_id: Uuid) -> Result<Option<UserDataRow>>;

    /// Writes one field, inserting the row if the user has none yet.
    /// The other field keeps its current value (empty on insert).
    async fn save_field(&self, user_id: Uuid, field: UserDataField, value: &str) -> Result<()>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

pub struct PgUserDataStore {
    pool: PgPool,
}

impl PgUserDataStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDataStore for PgUserDataStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<UserDataRow>> {
        Ok(
            sqlx::query_as::<_, UserDataRow>("SELECT * FROM user_data WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn save_field(&self, user_id: Uuid, field: UserDataField, value: &str) -> Result<()> {
        // Column names come from a closed enum, never from request input.
        let column = field.column();
        let sql = format!(
            r#"
            INSERT INTO user_data (user_id, {column})
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET {column} = EXCLUDED.{column}, updated_at = now()
            "#
        );

        sqlx::query(&sql)
            .bind(user_id)
            .bind(value)
            .execute(&self.pool)
            .await?;

        debug!("Saved {column} for user {user_id}");
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

/// Table-shaped in-memory store: a list of rows, upserted by select-then-insert-or-update.
#[derive(Default)]
pub struct MemoryUserDataStore {
    rows: RwLock<Vec<UserDataRow>>,
}

impl MemoryUserDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn row_count(&self, user_id: Uuid) -> usize {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| row.user_id == user_id)
            .count()
    }
}

#[async_trait]
impl UserDataStore for MemoryUserDataStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<UserDataRow>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|row| row.user_id == user_id)
            .cloned())
    }

    async fn save_field(&self, user_id: Uuid, field: UserDataField, value: &str) -> Result<()> {
        let mut rows = self.rows.write().await;
        let now = Utc::now();

        let index = match rows.iter().position(|row| row.user_id == user_id) {
            Some(index) => index,
            None => {
                rows.push(UserDataRow {
                    id: Uuid::new_v4(),
                    user_id,
                    biography: String::new(),
                    client_profile: String::new(),
                    created_at: now,
                    updated_at: now,
                });
                rows.len() - 1
            }
        };

        let row = &mut rows[index];
        match field {
            UserDataField::Biography => row.biography = value.to_string(),
            UserDataField::ClientProfile => row.client_profile = value.to_string(),
        }
        row.updated_at = now;

        debug!("Saved {} for user {user_id} (memory)", field.column());
        Ok(())
    }
}
