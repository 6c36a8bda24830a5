// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleExcerpt, ArticleSlug, ArticleTitle,
};
use crate::domain::image::ImageKey;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub excerpt: Option<ArticleExcerpt>,
    pub published: bool,
    /// Weak reference into the image store; the object may no longer exist.
    pub cover_image_key: Option<ImageKey>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_visible_publicly(&self) -> bool {
        self.published
    }

    /// Apply a full overwrite in place. Used by in-memory stores; SQL stores
    /// apply the same rules in their UPDATE statement.
    pub fn apply(&mut self, update: ArticleUpdate) {
        self.slug = update.slug;
        self.title = update.title;
        self.content = update.content;
        self.excerpt = update.excerpt;
        self.published = update.published;
        match update.cover_image {
            CoverImageChange::Keep => {}
            CoverImageChange::Clear => self.cover_image_key = None,
            CoverImageChange::Set(key) => self.cover_image_key = Some(key),
        }
        self.updated_at = update.updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub excerpt: Option<ArticleExcerpt>,
    pub published: bool,
    pub cover_image_key: Option<ImageKey>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn into_article(self) -> Article {
        Article {
            slug: self.slug,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            published: self.published,
            cover_image_key: self.cover_image_key,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverImageChange {
    Keep,
    Clear,
    Set(ImageKey),
}

/// Overwrite of every mutable field of the article currently stored under
/// `original_slug`. The slug itself may change.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub original_slug: ArticleSlug,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub excerpt: Option<ArticleExcerpt>,
    pub published: bool,
    pub cover_image: CoverImageChange,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    PublishedOnly,
    All,
}

impl Visibility {
    pub fn admits(self, article: &Article) -> bool {
        match self {
            Self::PublishedOnly => article.is_visible_publicly(),
            Self::All => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub slug: ArticleSlug,
    pub updated_at: DateTime<Utc>,
}
