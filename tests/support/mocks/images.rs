// tests/support/mocks/images.rs
use blog_cms::domain::errors::{DomainError, DomainResult};
use blog_cms::domain::image::{ImageKey, ImageObject, ImageStore};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryImageStore {
    objects: Mutex<HashMap<String, ImageObject>>,
}

impl InMemoryImageStore {
    pub fn insert(&self, key: &str, object: ImageObject) {
        self.objects.lock().unwrap().insert(key.to_string(), object);
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ImageStore for InMemoryImageStore {
    async fn put(&self, key: &ImageKey, object: ImageObject) -> DomainResult<()> {
        self.insert(key.as_str(), object);
        Ok(())
    }

    async fn get(&self, key: &ImageKey) -> DomainResult<Option<ImageObject>> {
        Ok(self.objects.lock().unwrap().get(key.as_str()).cloned())
    }
}

/// Every call fails as an unreachable backing store would.
pub struct FailingImageStore;

#[async_trait::async_trait]
impl ImageStore for FailingImageStore {
    async fn put(&self, _key: &ImageKey, _object: ImageObject) -> DomainResult<()> {
        Err(DomainError::Persistence("bucket unavailable".into()))
    }

    async fn get(&self, _key: &ImageKey) -> DomainResult<Option<ImageObject>> {
        Err(DomainError::Persistence("bucket unavailable".into()))
    }
}
