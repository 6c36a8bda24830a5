use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleSlug, Visibility},
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Public detail lookup: drafts are indistinguishable from missing rows.
    pub async fn get_published_article(&self, query: GetArticleBySlugQuery) -> ApplicationResult<ArticleDto> {
        self.find(query.slug, Visibility::PublishedOnly).await
    }

    /// Admin lookup used by the edit form; any publish state.
    pub async fn get_article_for_edit(&self, query: GetArticleBySlugQuery) -> ApplicationResult<ArticleDto> {
        self.find(query.slug, Visibility::All).await
    }

    async fn find(&self, slug: String, visibility: Visibility) -> ApplicationResult<ArticleDto> {
        let Ok(slug) = ArticleSlug::new(slug) else {
            return Err(ApplicationError::not_found("Post not found"));
        };
        self.read_repo
            .find_by_slug(&slug, visibility)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Post not found"))
    }
}
