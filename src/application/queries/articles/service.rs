// src/application/queries/articles/service.rs
use crate::domain::article::ArticleReadRepository;
use std::sync::Arc;

/// Published articles shown on the homepage.
pub const HOMEPAGE_LIMIT: u32 = 10;
/// Maximum number of search hits returned.
pub const SEARCH_LIMIT: u32 = 20;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) dashboard_page_size: u32,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, dashboard_page_size: u32) -> Self {
        Self {
            read_repo,
            dashboard_page_size: dashboard_page_size.max(1),
        }
    }
}
