//! PostgreSQL enrollment repository implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{Postgres, QueryBuilder, Row};

use crate::domain::enrollment::{
    Enrollment, EnrollmentFilters, EnrollmentId, EnrollmentRepository, EnrollmentStatus,
    NewEnrollment,
};
use crate::domain::DomainError;

/// Current time at TIMESTAMPTZ precision, so a record returned from
/// `create` equals the one read back later.
fn storage_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

const SELECT_COLUMNS: &str =
    "SELECT id, user_id, course_id, status, created_at, updated_at FROM enrollments";

/// PostgreSQL connection configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/enrollments".to_string(),
            max_connections: 10,
            connect_timeout_secs: 30,
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

/// PostgreSQL implementation of EnrollmentRepository
#[derive(Debug, Clone)]
pub struct PostgresEnrollmentRepository {
    pool: PgPool,
}

impl PostgresEnrollmentRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect using a pooled connection
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        Ok(Self::new(pool))
    }

    /// Ensures the enrollments table exists
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS enrollments (
                id VARCHAR(64) PRIMARY KEY,
                user_id VARCHAR(255) NOT NULL,
                course_id VARCHAR(255) NOT NULL,
                status VARCHAR(16) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl EnrollmentRepository for PostgresEnrollmentRepository {
    async fn create(&self, enrollment: NewEnrollment) -> Result<Enrollment, DomainError> {
        let created = enrollment.into_enrollment(EnrollmentId::generate(), storage_now());

        sqlx::query(
            r#"
            INSERT INTO enrollments (id, user_id, course_id, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(created.id().as_str())
        .bind(created.user_id())
        .bind(created.course_id())
        .bind(created.status().as_str())
        .bind(created.created_at())
        .bind(created.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create enrollment: {}", e)))?;

        Ok(created)
    }

    async fn get(&self, id: &EnrollmentId) -> Result<Option<Enrollment>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get enrollment: {}", e)))?;

        row.as_ref().map(row_to_enrollment).transpose()
    }

    async fn get_all(
        &self,
        filters: &EnrollmentFilters,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Vec<Enrollment>, DomainError> {
        let mut query = build_select(filters, offset, limit);

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list enrollments: {}", e)))?;

        rows.iter().map(row_to_enrollment).collect()
    }

    async fn update(
        &self,
        id: &EnrollmentId,
        status: Option<EnrollmentStatus>,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE enrollments
            SET status = COALESCE($2, status), updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .bind(status.map(|s| s.as_str()))
        .bind(storage_now())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update enrollment: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(id.as_str()));
        }

        Ok(())
    }

    async fn count(&self, filters: &EnrollmentFilters) -> Result<usize, DomainError> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM enrollments");
        push_filters(&mut query, filters);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count enrollments: {}", e)))?;

        usize::try_from(count)
            .map_err(|e| DomainError::storage(format!("Invalid enrollment count: {}", e)))
    }
}

fn build_select(
    filters: &EnrollmentFilters,
    offset: usize,
    limit: Option<usize>,
) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
    push_filters(&mut query, filters);
    query.push(" ORDER BY created_at ASC, id ASC");

    if let Some(limit) = limit {
        query.push(" LIMIT ").push_bind(to_i64(limit));
    }

    query.push(" OFFSET ").push_bind(to_i64(offset));
    query
}

fn push_filters(query: &mut QueryBuilder<'static, Postgres>, filters: &EnrollmentFilters) {
    let mut separator = " WHERE ";

    if let Some(ref user_id) = filters.user_id {
        query.push(separator).push("user_id = ").push_bind(user_id.clone());
        separator = " AND ";
    }

    if let Some(ref course_id) = filters.course_id {
        query.push(separator).push("course_id = ").push_bind(course_id.clone());
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn row_to_enrollment(row: &PgRow) -> Result<Enrollment, DomainError> {
    let map_err = |e: sqlx::Error| DomainError::storage(format!("Failed to read enrollment row: {}", e));

    let id: String = row.try_get("id").map_err(map_err)?;
    let user_id: String = row.try_get("user_id").map_err(map_err)?;
    let course_id: String = row.try_get("course_id").map_err(map_err)?;
    let status: String = row.try_get("status").map_err(map_err)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_err)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_err)?;

    let status = status
        .parse::<EnrollmentStatus>()
        .map_err(|_| DomainError::storage(format!("Unknown stored status '{}'", status)))?;

    Ok(Enrollment::restore(
        EnrollmentId::new(id)?,
        user_id,
        course_id,
        status,
        created_at,
        updated_at,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_storage_now_has_microsecond_precision() {
        for _ in 0..100 {
            assert_eq!(storage_now().nanosecond() % 1_000, 0);
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = PostgresConfig::new("postgres://db/enrollments").with_max_connections(4);

        assert_eq!(config.url, "postgres://db/enrollments");
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.connect_timeout_secs, 30);
    }

    #[test]
    fn test_select_without_filters() {
        let query = build_select(&EnrollmentFilters::new(), 0, None);

        assert_eq!(
            query.sql(),
            format!("{} ORDER BY created_at ASC, id ASC OFFSET $1", SELECT_COLUMNS)
        );
    }

    #[test]
    fn test_select_with_both_filters() {
        let filters = EnrollmentFilters::new().with_user_id("u1").with_course_id("c1");
        let query = build_select(&filters, 10, Some(10));

        assert_eq!(
            query.sql(),
            format!(
                "{} WHERE user_id = $1 AND course_id = $2 ORDER BY created_at ASC, id ASC LIMIT $3 OFFSET $4",
                SELECT_COLUMNS
            )
        );
    }

    #[test]
    fn test_select_with_course_filter_only() {
        let filters = EnrollmentFilters::new().with_course_id("c1");
        let query = build_select(&filters, 0, Some(5));

        assert!(query.sql().contains(" WHERE course_id = $1 ORDER BY"));
    }
}
