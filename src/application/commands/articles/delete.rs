// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleSlug};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Hard delete. Removing a slug that does not exist is not an error.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let Ok(slug) = ArticleSlug::new(command.slug) else {
            tracing::debug!("delete requested for an unusable slug; nothing to remove");
            return Ok(());
        };

        let removed = self.write_repo.delete(&slug).await?;
        if removed {
            tracing::info!(slug = %slug, "article deleted");
        } else {
            tracing::debug!(slug = %slug, "delete requested for missing article");
        }
        Ok(())
    }
}
