use crate::domain::article::{Article, ArticleExcerpt, SitemapEntry};
use crate::domain::image::ImageKey;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub published: bool,
    pub cover_image_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn cover_image_url(&self) -> Option<String> {
        self.cover_image_key
            .as_deref()
            .map(|key| format!("/images/{key}"))
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            slug: article.slug.into_inner(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            excerpt: article.excerpt.map(ArticleExcerpt::into_inner),
            published: article.published,
            cover_image_key: article.cover_image_key.map(ImageKey::into_inner),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SitemapEntryDto {
    pub slug: String,
    pub updated_at: DateTime<Utc>,
}

impl From<SitemapEntry> for SitemapEntryDto {
    fn from(entry: SitemapEntry) -> Self {
        Self {
            slug: entry.slug.into_inner(),
            updated_at: entry.updated_at,
        }
    }
}
