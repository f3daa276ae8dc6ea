// src/infrastructure/repositories/postgres_article.rs
use crate::domain::article::{
    Article, ArticleId, ArticlePatch, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Articles repository over the `blogful_articles` table. Holds no state
/// beyond the injected pool; every call is a single statement.
#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    date_published: DateTime<Utc>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: ArticleId::new(row.id),
            title: row.title,
            content: row.content,
            date_published: row.date_published,
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleRepository {
    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content, date_published FROM blogful_articles",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, content, date_published
             FROM blogful_articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Article::from))
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            date_published,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO blogful_articles (title, content, date_published)
             VALUES ($1, $2, COALESCE($3, now()))
             RETURNING id, title, content, date_published",
        )
        .bind(title)
        .bind(content)
        .bind(date_published)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: ArticleId, patch: ArticlePatch) -> DomainResult<u64> {
        if patch.is_empty() {
            return Err(DomainError::EmptyPatch);
        }

        let ArticlePatch {
            title,
            content,
            date_published,
        } = patch;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE blogful_articles SET ");
        let mut assignments = builder.separated(", ");

        if let Some(title) = title {
            assignments.push("title = ");
            assignments.push_bind_unseparated(title);
        }

        if let Some(content) = content {
            assignments.push("content = ");
            assignments.push_bind_unseparated(content);
        }

        if let Some(date_published) = date_published {
            assignments.push("date_published = ");
            assignments.push_bind_unseparated(date_published);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM blogful_articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
