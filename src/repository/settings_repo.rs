use crate::repository::db::Database;
use crate::repository::repository_error::RepositoryResult;
use async_trait::async_trait;

/// Admin password hash key in `portal_settings`.
pub const ADMIN_PASSWORD_HASH: &str = "admin_password_hash";

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> RepositoryResult<()>;
}

pub struct PgSettingsRepository {
    db: Database,
}

impl PgSettingsRepository {
    pub fn new(db: Database) -> Self {
        PgSettingsRepository { db }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM portal_settings WHERE key = $1")
                .bind(key)
                .fetch_optional(self.db.pool()?)
                .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> RepositoryResult<()> {
        sqlx::query(
            "INSERT INTO portal_settings (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(key)
        .bind(value)
        .execute(self.db.pool()?)
        .await?;
        Ok(())
    }
}
