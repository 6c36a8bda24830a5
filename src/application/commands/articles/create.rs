// src/application/commands/articles/create.rs
use super::{ArticleCommandService, service::parse_cover_key};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleExcerpt, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub published: bool,
    pub cover_image_key: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let slug = self.resolve_slug(&command.slug, &title)?;
        let content = ArticleContent::new(command.content)?;
        let excerpt = ArticleExcerpt::parse(command.excerpt);
        let cover_image_key = parse_cover_key(command.cover_image_key)?;
        let now = self.clock.now();

        let new_article = NewArticle {
            slug,
            title,
            content,
            excerpt,
            published: command.published,
            cover_image_key,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(slug = %created.slug, published = created.published, "article created");
        Ok(created.into())
    }
}
