use super::{ArticleQueryService, HOMEPAGE_LIMIT};
use crate::{
    application::{
        dto::{ArticleDto, OffsetPage},
        error::ApplicationResult,
    },
    domain::article::{ArticleListQuery, Visibility},
};

pub struct ListAllArticlesQuery {
    /// 1-based; zero is treated as the first page.
    pub page: u32,
}

impl ArticleQueryService {
    pub async fn list_published(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self
            .read_repo
            .list(ArticleListQuery::new(Visibility::PublishedOnly, HOMEPAGE_LIMIT))
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Every article regardless of publish state, newest first.
    pub async fn list_all(&self, query: ListAllArticlesQuery) -> ApplicationResult<OffsetPage<ArticleDto>> {
        let page = query.page.max(1);
        let per_page = self.dashboard_page_size;
        let offset = u64::from(page - 1) * u64::from(per_page);

        let records = self
            .read_repo
            .list(ArticleListQuery::new(Visibility::All, per_page).with_offset(offset))
            .await?;
        let total = self.read_repo.count(Visibility::All).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, page, per_page, total))
    }
}
