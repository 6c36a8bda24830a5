use crate::domain::errors::DomainResult;
use crate::domain::image::{ImageKey, ImageObject};
use async_trait::async_trait;

/// Key-addressed blob store for uploaded images. Objects are immutable once
/// written; there is no delete.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn put(&self, key: &ImageKey, object: ImageObject) -> DomainResult<()>;
    async fn get(&self, key: &ImageKey) -> DomainResult<Option<ImageObject>>;
}
