// src/application/ports/util.rs
use crate::domain::errors::DomainResult;
use crate::domain::image::{ImageContentType, ImageKey};

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

pub trait ImageKeyGenerator: Send + Sync {
    /// A fresh, collision-resistant key for an upload of the given type.
    fn generate(
        &self,
        content_type: ImageContentType,
        file_name: Option<&str>,
    ) -> DomainResult<ImageKey>;
}
