pub mod articles;
pub mod images;
pub mod pagination;

pub use articles::{ArticleDto, SitemapEntryDto};
pub use images::{ImageDto, UploadedImageDto};
pub use pagination::OffsetPage;
