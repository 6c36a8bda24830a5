use crate::domain::article::entity::{
    Article, ArticleUpdate, NewArticle, SitemapEntry, Visibility,
};
use crate::domain::article::value_objects::{ArticleSlug, SearchTerm};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Newest-first window over the articles admitted by `visibility`.
#[derive(Debug, Clone)]
pub struct ArticleListQuery {
    pub visibility: Visibility,
    pub search: Option<SearchTerm>,
    pub limit: u32,
    pub offset: u64,
}

impl ArticleListQuery {
    pub fn new(visibility: Visibility, limit: u32) -> Self {
        Self {
            visibility,
            search: None,
            limit,
            offset: 0,
        }
    }

    pub fn with_search(mut self, search: SearchTerm) -> Self {
        self.search = Some(search);
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Returns `None` when no article is stored under `update.original_slug`.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>>;
    /// Returns whether a row was removed.
    async fn delete(&self, slug: &ArticleSlug) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
        visibility: Visibility,
    ) -> DomainResult<Option<Article>>;
    async fn list(&self, query: ArticleListQuery) -> DomainResult<Vec<Article>>;
    async fn count(&self, visibility: Visibility) -> DomainResult<u64>;
    async fn sitemap_entries(&self) -> DomainResult<Vec<SitemapEntry>>;
}
