use bytes::Bytes;

/// A stored image: its bytes plus the content type recorded at upload time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageObject {
    pub content_type: String,
    pub data: Bytes,
}

impl ImageObject {
    pub fn new(content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
