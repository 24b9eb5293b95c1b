use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::errors::{HospitalError, HospitalResult};
use crate::domain::hospital::{Hospital, HospitalDraft};
use crate::domain::repositories::HospitalRepository;

/// PostgreSQL implementation of HospitalRepository
///
/// Queries are checked at runtime so the crate builds without a live
/// database. The `hospitals` table comes from the embedded migrations.
/// Ids only ever come from the `SERIAL` sequence; a draft carrying an id
/// updates that row and never inserts one.
pub struct PostgresHospitalRepository {
    pool: PgPool,
}

impl PostgresHospitalRepository {
    /// Creates a new PostgresHospitalRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HospitalRepository for PostgresHospitalRepository {
    async fn save(&self, hospital: HospitalDraft) -> HospitalResult<Hospital> {
        let Some(id) = hospital.id else {
            let saved = sqlx::query_as::<_, Hospital>(
                r#"
                INSERT INTO hospitals (name, branch, experience, email, password_hash, contact)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, name, branch, experience, email, password_hash, contact,
                          created_at, updated_at
                "#,
            )
            .bind(&hospital.name)
            .bind(&hospital.branch)
            .bind(hospital.experience)
            .bind(&hospital.email)
            .bind(&hospital.password_hash)
            .bind(&hospital.contact)
            .fetch_one(&self.pool)
            .await?;

            return Ok(saved);
        };

        let saved = sqlx::query_as::<_, Hospital>(
            r#"
            UPDATE hospitals SET
                name = $2,
                branch = $3,
                experience = $4,
                email = $5,
                password_hash = $6,
                contact = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, branch, experience, email, password_hash, contact,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&hospital.name)
        .bind(&hospital.branch)
        .bind(hospital.experience)
        .bind(&hospital.email)
        .bind(&hospital.password_hash)
        .bind(&hospital.contact)
        .fetch_optional(&self.pool)
        .await?;

        saved.ok_or(HospitalError::NotFound(id))
    }

    async fn find_all(&self) -> HospitalResult<Vec<Hospital>> {
        let rows = sqlx::query_as::<_, Hospital>(
            r#"
            SELECT id, name, branch, experience, email, password_hash, contact,
                   created_at, updated_at
            FROM hospitals
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> HospitalResult<Option<Hospital>> {
        let row = sqlx::query_as::<_, Hospital>(
            r#"
            SELECT id, name, branch, experience, email, password_hash, contact,
                   created_at, updated_at
            FROM hospitals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> HospitalResult<Option<Hospital>> {
        let row = sqlx::query_as::<_, Hospital>(
            r#"
            SELECT id, name, branch, experience, email, password_hash, contact,
                   created_at, updated_at
            FROM hospitals
            WHERE email = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_contact(&self, contact: &str) -> HospitalResult<Option<Hospital>> {
        let row = sqlx::query_as::<_, Hospital>(
            r#"
            SELECT id, name, branch, experience, email, password_hash, contact,
                   created_at, updated_at
            FROM hospitals
            WHERE contact = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(contact)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete_by_id(&self, id: i32) -> HospitalResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM hospitals WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
