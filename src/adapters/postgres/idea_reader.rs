//! PostgreSQL implementation of IdeaReader.
//!
//! Reads seeded ideas from the `ideas` table created by the bundled migrations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::cycle::Phase;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{IdeaDocument, IdeaFilter, IdeaReader};

/// PostgreSQL implementation of the IdeaReader port.
#[derive(Clone)]
pub struct PostgresIdeaReader {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresIdeaReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresIdeaReader")
            .field("pool", &"PgPool")
            .finish()
    }
}

impl PostgresIdeaReader {
    /// Creates a new PostgresIdeaReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row for idea queries.
#[derive(Debug, sqlx::FromRow)]
struct IdeaRow {
    id: Uuid,
    phase: String,
    title: String,
    description: String,
    tags: Option<Vec<String>>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<IdeaRow> for IdeaDocument {
    type Error = DomainError;

    fn try_from(row: IdeaRow) -> Result<Self, Self::Error> {
        let phase: Phase = row.phase.parse().map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid phase value: {}", row.phase),
            )
        })?;

        Ok(IdeaDocument {
            id: row.id,
            phase,
            title: row.title,
            description: row.description,
            tags: row.tags,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Maps a limit of zero to SQL `LIMIT NULL` (no limit).
fn sql_limit(limit: u32) -> Option<i64> {
    (limit > 0).then(|| i64::from(limit))
}

fn map_sqlx_error(e: sqlx::Error) -> DomainError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) | sqlx::Error::PoolClosed => {
            DomainError::unavailable("postgres", format!("Idea store unreachable: {}", e))
        }
        other => DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to query ideas: {}", other),
        ),
    }
}

#[async_trait]
impl IdeaReader for PostgresIdeaReader {
    async fn find(&self, filter: &IdeaFilter, limit: u32) -> Result<Vec<IdeaDocument>, DomainError> {
        let rows: Vec<IdeaRow> = sqlx::query_as(
            r#"
            SELECT id, phase, title, description, tags, created_at, updated_at
            FROM ideas
            WHERE ($1::text IS NULL OR phase = $1)
            ORDER BY created_at ASC NULLS LAST, id ASC
            LIMIT $2
            "#,
        )
        .bind(filter.phase.map(|p| p.as_str()))
        .bind(sql_limit(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(IdeaDocument::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(phase: &str) -> IdeaRow {
        IdeaRow {
            id: Uuid::new_v4(),
            phase: phase.to_string(),
            title: "Comfort kit".to_string(),
            description: "Heat pad".to_string(),
            tags: Some(vec!["comfort".to_string()]),
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    #[test]
    fn zero_limit_means_unlimited() {
        assert_eq!(sql_limit(0), None);
        assert_eq!(sql_limit(20), Some(20));
    }

    #[test]
    fn row_converts_to_document() {
        let document = IdeaDocument::try_from(row("period")).unwrap();
        assert_eq!(document.phase, Phase::Period);
        assert_eq!(document.tags, Some(vec!["comfort".to_string()]));
    }

    #[test]
    fn row_with_unknown_phase_is_a_database_error() {
        let err = IdeaDocument::try_from(row("winter")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn pool_timeout_maps_to_unavailable() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert_eq!(err.code, ErrorCode::DependencyUnavailable);
    }

    #[test]
    fn other_errors_map_to_database_error() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
