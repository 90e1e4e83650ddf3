//! PostgreSQL member repository

use async_trait::async_trait;
use shared::models::{Member, MemberUpdate, NewMember};
use shared::util::now_utc;
use sqlx::PgPool;

use super::{MemberRepository, RepoResult};

const COLUMNS: &str =
    "id, first_name, last_name, email, membership_type, is_active, joined_date, updated_at";

#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    async fn create(&self, data: &NewMember) -> RepoResult<Member> {
        let now = now_utc();
        let member: Member = sqlx::query_as(&format!(
            r#"
            INSERT INTO members (first_name, last_name, email, membership_type, is_active, joined_date, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.membership_type)
        .bind(data.is_active)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(member)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let member = sqlx::query_as(&format!("SELECT {COLUMNS} FROM members WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(member)
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        let member = sqlx::query_as(&format!("SELECT {COLUMNS} FROM members WHERE email = $1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(member)
    }

    async fn list(&self, skip: i64, limit: i64) -> RepoResult<Vec<Member>> {
        let rows = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM members ORDER BY id OFFSET $1 LIMIT $2"
        ))
        .bind(skip.max(0))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, data: &MemberUpdate) -> RepoResult<Option<Member>> {
        let now = now_utc();
        let member = sqlx::query_as(&format!(
            r#"
            UPDATE members
            SET first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name),
                email = COALESCE($3, email),
                membership_type = COALESCE($4, membership_type),
                is_active = COALESCE($5, is_active),
                updated_at = GREATEST($6, joined_date)
            WHERE id = $7
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.membership_type)
        .bind(data.is_active)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(member)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let rows = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(rows.rows_affected() > 0)
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
