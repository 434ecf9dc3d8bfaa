/*
 * Responsibility
 * - gists table reads for the /apps listing
 * - GistLister is the seam handlers depend on; PgGistRepo is the sqlx impl
 * - DB errors come back as RepoError, ready for AppError conversion
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::v1::dto::apps::{GistListPage, GistSummary, ListQuery};
use crate::api::v1::extractors::AuthUser;
use crate::repos::error::RepoError;

/// Rows per page. The query fetches one extra row to decide whether a
/// `next` offset exists.
pub const PAGE_SIZE: i64 = 100;

#[async_trait]
pub trait GistLister: Send + Sync {
    async fn list(&self, user: &AuthUser, query: &ListQuery) -> Result<GistListPage, RepoError>;
}

#[derive(Clone, Debug)]
pub struct PgGistRepo {
    pool: PgPool,
}

impl PgGistRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct GistRow {
    #[sqlx(rename = "gistId")]
    id: Uuid,
    name: String,
    #[sqlx(rename = "updatedAt")]
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl GistLister for PgGistRepo {
    async fn list(&self, user: &AuthUser, query: &ListQuery) -> Result<GistListPage, RepoError> {
        // $3 = NULL disables the name filter; an empty search string matches
        // everything, which is the verbatim reading of `search=`.
        let rows = sqlx::query_as::<_, GistRow>(
            r#"
            SELECT "gistId", name, "updatedAt"
            FROM gists
            WHERE "ownerId" = $1
              AND ($3::text IS NULL OR name ILIKE '%' || $3 || '%')
            ORDER BY "updatedAt" DESC
            LIMIT $4 OFFSET $2
            "#,
        )
        .bind(user.id)
        .bind(query.offset)
        .bind(query.search.as_deref())
        .bind(PAGE_SIZE + 1)
        .fetch_all(&self.pool)
        .await?;

        Ok(page_from_rows(rows, query.offset))
    }
}

fn page_from_rows(rows: Vec<GistRow>, offset: i64) -> GistListPage {
    let mut gists: Vec<GistSummary> = rows
        .into_iter()
        .map(|r| GistSummary {
            id: r.id,
            name: r.name,
            updated_at: r.updated_at,
        })
        .collect();

    let next = if gists.len() as i64 > PAGE_SIZE {
        gists.truncate(PAGE_SIZE as usize);
        Some(offset + PAGE_SIZE)
    } else {
        None
    };

    GistListPage { gists, next }
}
