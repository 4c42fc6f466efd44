use crate::model::dealer::Dealer;
use crate::repository::db::Database;
use crate::repository::repository_error::RepositoryResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait DealerRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Dealer>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Dealer>>;
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Dealer>>;
    async fn list(&self) -> RepositoryResult<Vec<Dealer>>;
    async fn upsert(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
        password_hash: Option<&str>,
        country: &str,
    ) -> RepositoryResult<Dealer>;
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}

pub struct PgDealerRepository {
    db: Database,
}

impl PgDealerRepository {
    pub fn new(db: Database) -> Self {
        PgDealerRepository { db }
    }
}

#[async_trait]
impl DealerRepository for PgDealerRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Dealer>> {
        let dealer = sqlx::query_as::<_, Dealer>("SELECT * FROM dealers WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.pool()?)
            .await?;
        Ok(dealer)
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Dealer>> {
        let dealer = sqlx::query_as::<_, Dealer>("SELECT * FROM dealers WHERE email = $1")
            .bind(email)
            .fetch_optional(self.db.pool()?)
            .await?;
        Ok(dealer)
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Dealer>> {
        let dealer = sqlx::query_as::<_, Dealer>("SELECT * FROM dealers WHERE name = $1")
            .bind(name)
            .fetch_optional(self.db.pool()?)
            .await?;
        Ok(dealer)
    }

    async fn list(&self) -> RepositoryResult<Vec<Dealer>> {
        let dealers = sqlx::query_as::<_, Dealer>("SELECT * FROM dealers ORDER BY name")
            .fetch_all(self.db.pool()?)
            .await?;
        Ok(dealers)
    }

    async fn upsert(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
        password_hash: Option<&str>,
        country: &str,
    ) -> RepositoryResult<Dealer> {
        let dealer = sqlx::query_as::<_, Dealer>(
            r#"
            INSERT INTO dealers (id, name, email, password_hash, country, created_at, updated_at)
            VALUES ($1, $2, $3, COALESCE($4, ''), $5, NOW(), NOW())
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                password_hash = COALESCE($4, dealers.password_hash),
                country = EXCLUDED.country,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(country)
        .fetch_one(self.db.pool()?)
        .await?;
        Ok(dealer)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM dealers WHERE id = $1")
            .bind(id)
            .execute(self.db.pool()?)
            .await?;
        if result.rows_affected() == 0 {
            return Err(crate::repository::repository_error::RepositoryError::not_found(
                format!("No dealer found to delete for ID: {}", id),
            ));
        }
        Ok(())
    }
}
