use super::{ArticleCommandService, service::parse_cover_key};
use crate::{
    application::{
        dto::ArticleDto,
        error::ApplicationResult,
    },
    domain::article::{
        ArticleContent, ArticleExcerpt, ArticleSlug, ArticleTitle, ArticleUpdate,
        CoverImageChange,
    },
};

pub struct UpdateArticleCommand {
    pub original_slug: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub published: bool,
    /// `None` leaves the cover untouched; a blank value clears it.
    pub cover_image_key: Option<String>,
}

impl ArticleCommandService {
    /// Overwrites the article stored under `original_slug`. An unknown
    /// original slug matches no row and is not an error.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<Option<ArticleDto>> {
        let original_slug = ArticleSlug::new(command.original_slug)?;
        let title = ArticleTitle::new(command.title)?;
        let slug = self.resolve_slug(&command.slug, &title)?;
        let content = ArticleContent::new(command.content)?;
        let cover_image = match command.cover_image_key {
            None => CoverImageChange::Keep,
            Some(raw) => parse_cover_key(Some(raw))?
                .map_or(CoverImageChange::Clear, CoverImageChange::Set),
        };

        let update = ArticleUpdate {
            original_slug,
            slug,
            title,
            content,
            excerpt: ArticleExcerpt::parse(command.excerpt),
            published: command.published,
            cover_image,
            updated_at: self.clock.now(),
        };

        let original = update.original_slug.clone();
        let Some(updated) = self.write_repo.update(update).await? else {
            tracing::debug!(slug = %original, "update requested for missing article");
            return Ok(None);
        };

        tracing::info!(from = %original, to = %updated.slug, published = updated.published, "article updated");
        Ok(Some(updated.into()))
    }
}
