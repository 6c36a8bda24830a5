use std::sync::Arc;

use crate::{
    application::{
        dto::ImageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::image::{ImageKey, ImageStore},
};

pub struct GetImageQuery {
    pub filename: String,
}

pub struct ImageQueryService {
    store: Arc<dyn ImageStore>,
}

impl ImageQueryService {
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }

    pub async fn get_image(&self, query: GetImageQuery) -> ApplicationResult<ImageDto> {
        // A name that could never have been generated cannot exist in the store.
        let Ok(key) = ImageKey::parse(query.filename) else {
            return Err(ApplicationError::not_found("Image not found"));
        };

        self.store
            .get(&key)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Image not found"))
    }
}
