use super::{ArticleQueryService, SEARCH_LIMIT};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleListQuery, SearchTerm, Visibility},
};

pub struct SearchArticlesQuery {
    pub query: String,
}

impl ArticleQueryService {
    /// Substring match on title or content over published articles. A blank
    /// query yields nothing and never reaches the store.
    pub async fn search_articles(&self, query: SearchArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let Some(term) = SearchTerm::parse(&query.query) else {
            return Ok(Vec::new());
        };

        let records = self
            .read_repo
            .list(ArticleListQuery::new(Visibility::PublishedOnly, SEARCH_LIMIT).with_search(term))
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
