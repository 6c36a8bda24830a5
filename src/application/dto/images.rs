use crate::domain::image::{ImageKey, ImageObject};
use bytes::Bytes;
use serde::Serialize;

/// Body of a successful upload response.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedImageDto {
    pub success: bool,
    pub url: String,
    pub filename: String,
}

impl From<ImageKey> for UploadedImageDto {
    fn from(key: ImageKey) -> Self {
        Self {
            success: true,
            url: key.url_path(),
            filename: key.into_inner(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageDto {
    pub content_type: String,
    pub data: Bytes,
}

impl From<ImageObject> for ImageDto {
    fn from(object: ImageObject) -> Self {
        Self {
            content_type: object.content_type,
            data: object.data,
        }
    }
}
