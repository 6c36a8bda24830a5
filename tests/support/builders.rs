// tests/support/builders.rs
use blog_cms::domain::article::{Article, ArticleContent, ArticleExcerpt, ArticleSlug, ArticleTitle};
use blog_cms::domain::image::ImageKey;
use chrono::Duration;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    slug: String,
    title: String,
    content: String,
    excerpt: Option<String>,
    published: bool,
    cover_image_key: Option<String>,
    age_minutes: i64,
}

impl ArticleBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            title: format!("Title of {slug}"),
            content: format!("<p>Body of {slug}</p>"),
            slug,
            excerpt: None,
            published: false,
            cover_image_key: None,
            age_minutes: 0,
        }
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn cover(mut self, key: impl Into<String>) -> Self {
        self.cover_image_key = Some(key.into());
        self
    }

    /// Created this many minutes before `fixed_now()`.
    pub fn minutes_old(mut self, minutes: i64) -> Self {
        self.age_minutes = minutes;
        self
    }

    pub fn build(self) -> Article {
        let at = fixed_now() - Duration::minutes(self.age_minutes);
        Article {
            slug: ArticleSlug::new(self.slug).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            excerpt: ArticleExcerpt::parse(self.excerpt),
            published: self.published,
            cover_image_key: self.cover_image_key.map(|k| ImageKey::parse(k).unwrap()),
            created_at: at,
            updated_at: at,
        }
    }
}
