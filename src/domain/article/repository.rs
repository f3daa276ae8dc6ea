use crate::domain::article::entity::{Article, ArticlePatch, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persists one article and returns it with its generated id and
    /// resolved publication date.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Overwrites the fields present in `patch`; returns the number of rows
    /// affected (0 when `id` matches nothing).
    async fn update(&self, id: ArticleId, patch: ArticlePatch) -> DomainResult<u64>;
    /// Returns the number of rows removed.
    async fn delete(&self, id: ArticleId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
}
