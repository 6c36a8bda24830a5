pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    Article, ArticleUpdate, CoverImageChange, NewArticle, SitemapEntry, Visibility,
};
pub use repository::{ArticleListQuery, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleExcerpt, ArticleSlug, ArticleTitle, SearchTerm};
