// src/application/queries/articles/mod.rs
mod get_by_slug;
mod list;
mod search;
mod service;
mod sitemap;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListAllArticlesQuery;
pub use search::SearchArticlesQuery;
pub use service::{ArticleQueryService, HOMEPAGE_LIMIT, SEARCH_LIMIT};
