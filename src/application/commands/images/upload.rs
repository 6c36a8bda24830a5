use std::sync::Arc;

use crate::{
    application::{
        dto::UploadedImageDto,
        error::{ApplicationError, ApplicationResult},
        ports::util::ImageKeyGenerator,
    },
    domain::image::{ImageContentType, ImageObject, ImageStore},
};
use bytes::Bytes;

pub struct UploadImageCommand {
    /// Content type declared by the client for the file part.
    pub content_type: String,
    pub file_name: Option<String>,
    pub data: Bytes,
}

pub struct ImageCommandService {
    store: Arc<dyn ImageStore>,
    keys: Arc<dyn ImageKeyGenerator>,
}

impl ImageCommandService {
    pub fn new(store: Arc<dyn ImageStore>, keys: Arc<dyn ImageKeyGenerator>) -> Self {
        Self { store, keys }
    }

    pub async fn upload_image(&self, command: UploadImageCommand) -> ApplicationResult<UploadedImageDto> {
        let content_type = ImageContentType::parse(&command.content_type)?;
        let key = self.keys.generate(content_type, command.file_name.as_deref())?;
        let size = command.data.len();

        self.store
            .put(&key, ImageObject::new(content_type.mime(), command.data))
            .await
            .map_err(|err| {
                tracing::error!(key = %key, error = %err, "image upload failed");
                ApplicationError::infrastructure(format!("Upload failed: {err}"))
            })?;

        tracing::info!(key = %key, content_type = %content_type, size, "image uploaded");
        Ok(key.into())
    }
}
