// tests/support/mocks/articles.rs
use blog_cms::domain::article::{
    Article, ArticleListQuery, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle, SitemapEntry, Visibility,
};
use blog_cms::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Insertion-ordered article table. Reads are counted so tests can assert a
/// request never reached the store.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    rows: Mutex<Vec<Article>>,
    reads: AtomicUsize,
}

impl InMemoryArticleRepo {
    pub fn seed(&self, article: Article) {
        self.rows.lock().unwrap().push(article);
    }

    pub fn read_calls(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn get(&self, slug: &str) -> Option<Article> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.slug.as_str() == slug)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }

    /// Newest first; later insertions win ties on `created_at`.
    fn sorted(&self, visibility: Visibility) -> Vec<Article> {
        let rows = self.rows.lock().unwrap();
        let mut visible: Vec<(usize, Article)> = rows
            .iter()
            .enumerate()
            .filter(|(_, a)| visibility.admits(a))
            .map(|(i, a)| (i, a.clone()))
            .collect();
        visible.sort_by(|(ia, a), (ib, b)| b.created_at.cmp(&a.created_at).then(ib.cmp(ia)));
        visible.into_iter().map(|(_, a)| a).collect()
    }
}

#[async_trait::async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::Persistence("slug already exists".into()));
        }
        let article = article.into_article();
        rows.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>> {
        let mut rows = self.rows.lock().unwrap();
        if update.slug != update.original_slug && rows.iter().any(|a| a.slug == update.slug) {
            return Err(DomainError::Persistence("slug already exists".into()));
        }
        let Some(row) = rows.iter_mut().find(|a| a.slug == update.original_slug) else {
            return Ok(None);
        };
        row.apply(update);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| &a.slug != slug);
        Ok(rows.len() != before)
    }
}

#[async_trait::async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
        visibility: Visibility,
    ) -> DomainResult<Option<Article>> {
        self.record_read();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| &a.slug == slug && visibility.admits(a))
            .cloned())
    }

    async fn list(&self, query: ArticleListQuery) -> DomainResult<Vec<Article>> {
        self.record_read();
        let offset = usize::try_from(query.offset).unwrap();
        let limit = usize::try_from(query.limit).unwrap();
        Ok(self
            .sorted(query.visibility)
            .into_iter()
            .filter(|a| {
                query.search.as_ref().is_none_or(|term| {
                    term.matches(a.title.as_str()) || term.matches(a.content.as_str())
                })
            })
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn count(&self, visibility: Visibility) -> DomainResult<u64> {
        self.record_read();
        Ok(self.sorted(visibility).len() as u64)
    }

    async fn sitemap_entries(&self) -> DomainResult<Vec<SitemapEntry>> {
        self.record_read();
        Ok(self
            .sorted(Visibility::PublishedOnly)
            .into_iter()
            .map(|a| SitemapEntry {
                slug: a.slug,
                updated_at: a.updated_at,
            })
            .collect())
    }
}

/// Both halves of the content store, always failing.
pub struct FailingArticleRepo;

fn unavailable() -> DomainError {
    DomainError::Persistence("database is locked".into())
}

#[async_trait::async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(unavailable())
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Option<Article>> {
        Err(unavailable())
    }

    async fn delete(&self, _slug: &ArticleSlug) -> DomainResult<bool> {
        Err(unavailable())
    }
}

#[async_trait::async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_slug(
        &self,
        _slug: &ArticleSlug,
        _visibility: Visibility,
    ) -> DomainResult<Option<Article>> {
        Err(unavailable())
    }

    async fn list(&self, _query: ArticleListQuery) -> DomainResult<Vec<Article>> {
        Err(unavailable())
    }

    async fn count(&self, _visibility: Visibility) -> DomainResult<u64> {
        Err(unavailable())
    }

    async fn sitemap_entries(&self) -> DomainResult<Vec<SitemapEntry>> {
        Err(unavailable())
    }
}
