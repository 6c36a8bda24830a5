use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::image::{ImageKey, ImageObject, ImageStore};
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

const METADATA_SUFFIX: &str = ".meta.json";

#[derive(Debug, Serialize, Deserialize)]
struct ObjectMetadata {
    content_type: String,
}

/// Image store backed by a directory: `<root>/<key>` holds the bytes and
/// `<root>/<key>.meta.json` the recorded content type.
#[derive(Debug, Clone)]
pub struct FilesystemImageStore {
    root: PathBuf,
}

impl FilesystemImageStore {
    pub async fn open(root: impl Into<PathBuf>) -> DomainResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|err| io_error("create image directory", &root, &err))?;
        Ok(Self { root })
    }

    fn object_path(&self, key: &ImageKey) -> PathBuf {
        self.root.join(key.as_str())
    }

    fn metadata_path(&self, key: &ImageKey) -> PathBuf {
        self.root.join(format!("{}{METADATA_SUFFIX}", key.as_str()))
    }
}

fn io_error(action: &str, path: &Path, err: &std::io::Error) -> DomainError {
    DomainError::Persistence(format!("{action} {}: {err}", path.display()))
}

#[async_trait]
impl ImageStore for FilesystemImageStore {
    async fn put(&self, key: &ImageKey, object: ImageObject) -> DomainResult<()> {
        if key.as_str().ends_with(METADATA_SUFFIX) {
            return Err(DomainError::Validation(format!(
                "image key cannot end with {METADATA_SUFFIX}"
            )));
        }
        let object_path = self.object_path(key);
        let metadata_path = self.metadata_path(key);
        let metadata = serde_json::to_vec(&ObjectMetadata {
            content_type: object.content_type,
        })
        .map_err(|err| DomainError::Persistence(err.to_string()))?;

        // Metadata first: an object is only readable once both files exist.
        fs::write(&metadata_path, metadata)
            .await
            .map_err(|err| io_error("write", &metadata_path, &err))?;
        fs::write(&object_path, &object.data)
            .await
            .map_err(|err| io_error("write", &object_path, &err))?;
        Ok(())
    }

    async fn get(&self, key: &ImageKey) -> DomainResult<Option<ImageObject>> {
        // Sidecars are not objects.
        if key.as_str().ends_with(METADATA_SUFFIX) {
            return Ok(None);
        }
        let object_path = self.object_path(key);
        let data = match fs::read(&object_path).await {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error("read", &object_path, &err)),
        };

        let metadata_path = self.metadata_path(key);
        let content_type = match fs::read(&metadata_path).await {
            Ok(raw) => serde_json::from_slice::<ObjectMetadata>(&raw)
                .map_err(|err| DomainError::Persistence(err.to_string()))?
                .content_type,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(key = %key, "image metadata missing; serving as octet-stream");
                "application/octet-stream".to_string()
            }
            Err(err) => return Err(io_error("read", &metadata_path, &err)),
        };

        Ok(Some(ImageObject {
            content_type,
            data: Bytes::from(data),
        }))
    }
}
