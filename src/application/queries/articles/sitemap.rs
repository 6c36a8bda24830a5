use super::ArticleQueryService;
use crate::application::{dto::SitemapEntryDto, error::ApplicationResult};

impl ArticleQueryService {
    pub async fn sitemap_entries(&self) -> ApplicationResult<Vec<SitemapEntryDto>> {
        let entries = self.read_repo.sitemap_entries().await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
