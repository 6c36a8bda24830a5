use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleExcerpt, ArticleListQuery, ArticleReadRepository, ArticleSlug,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, CoverImageChange, NewArticle,
    SitemapEntry, Visibility,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::image::ImageKey;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    slug: String,
    title: String,
    content: String,
    excerpt: Option<String>,
    published: i64,
    cover_image_key: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            slug: ArticleSlug::new(row.slug)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            excerpt: ArticleExcerpt::parse(row.excerpt),
            published: row.published != 0,
            // Weak reference: an unusable stored key is treated as no cover.
            cover_image_key: row
                .cover_image_key
                .and_then(|key| ImageKey::parse(key).ok()),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct SitemapRow {
    slug: String,
    updated_at: DateTime<Utc>,
}

const SELECT_ARTICLE: &str = "SELECT slug, title, content, excerpt, published, cover_image_key, created_at, updated_at FROM posts";

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            title,
            content,
            excerpt,
            published,
            cover_image_key,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO posts (slug, title, content, excerpt, published, cover_image_key, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING slug, title, content, excerpt, published, cover_image_key, created_at, updated_at",
        )
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(excerpt.as_ref().map(ArticleExcerpt::as_str))
        .bind(i64::from(published))
        .bind(cover_image_key.as_ref().map(ImageKey::as_str))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>> {
        let ArticleUpdate {
            original_slug,
            slug,
            title,
            content,
            excerpt,
            published,
            cover_image,
            updated_at,
        } = update;

        let (replace_cover, cover_value) = match &cover_image {
            CoverImageChange::Keep => (false, None),
            CoverImageChange::Clear => (true, None),
            CoverImageChange::Set(key) => (true, Some(key.as_str())),
        };

        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE posts
             SET slug = ?, title = ?, content = ?, excerpt = ?, published = ?,
                 cover_image_key = CASE WHEN ? THEN ? ELSE cover_image_key END,
                 updated_at = ?
             WHERE slug = ?
             RETURNING slug, title, content, excerpt, published, cover_image_key, created_at, updated_at",
        )
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(excerpt.as_ref().map(ArticleExcerpt::as_str))
        .bind(i64::from(published))
        .bind(i64::from(replace_cover))
        .bind(cover_value)
        .bind(updated_at)
        .bind(original_slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn delete(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE slug = ?")
            .bind(slug.as_str())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}

fn apply_conditions<'a>(
    builder: &mut QueryBuilder<'a, Sqlite>,
    visibility: Visibility,
    search_pattern: Option<String>,
) {
    let mut has_where = false;
    if visibility == Visibility::PublishedOnly {
        builder.push(" WHERE published = 1");
        has_where = true;
    }

    if let Some(pattern) = search_pattern {
        builder.push(if has_where { " AND (" } else { " WHERE (" });
        builder.push("title LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" ESCAPE '\\' OR content LIKE ");
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\')");
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
        visibility: Visibility,
    ) -> DomainResult<Option<Article>> {
        let sql = match visibility {
            Visibility::PublishedOnly => {
                "SELECT slug, title, content, excerpt, published, cover_image_key, created_at, updated_at
                 FROM posts WHERE slug = ? AND published = 1 LIMIT 1"
            }
            Visibility::All => {
                "SELECT slug, title, content, excerpt, published, cover_image_key, created_at, updated_at
                 FROM posts WHERE slug = ? LIMIT 1"
            }
        };

        let row = sqlx::query_as::<_, ArticleRow>(sql)
            .bind(slug.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, query: ArticleListQuery) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ARTICLE);
        apply_conditions(
            &mut builder,
            query.visibility,
            query.search.as_ref().map(|term| term.like_pattern()),
        );
        builder.push(" ORDER BY created_at DESC, rowid DESC LIMIT ");
        builder.push_bind(i64::from(query.limit.max(1)));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(query.offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count(&self, visibility: Visibility) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(1) FROM posts");
        apply_conditions(&mut builder, visibility, None);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn sitemap_entries(&self) -> DomainResult<Vec<SitemapEntry>> {
        let rows = sqlx::query_as::<_, SitemapRow>(
            "SELECT slug, updated_at FROM posts WHERE published = 1 ORDER BY updated_at DESC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok::<_, DomainError>(SitemapEntry {
                    slug: ArticleSlug::new(row.slug)?,
                    updated_at: row.updated_at,
                })
            })
            .collect()
    }
}
