use crate::application::ports::util::{ImageKeyGenerator, SlugGenerator};
use crate::domain::errors::DomainResult;
use crate::domain::image::{ImageContentType, ImageKey};
use slug::slugify;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// `<uuid-v4>.<ext>` keys. The random part alone makes collisions negligible.
#[derive(Default, Clone)]
pub struct UuidImageKeyGenerator;

impl ImageKeyGenerator for UuidImageKeyGenerator {
    fn generate(
        &self,
        content_type: ImageContentType,
        file_name: Option<&str>,
    ) -> DomainResult<ImageKey> {
        let stem = Uuid::new_v4().simple().to_string();
        ImageKey::from_parts(&stem, &content_type.extension_for(file_name))
    }
}
