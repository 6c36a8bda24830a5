use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Name of an object in the image store. Restricted to a conservative
/// character set so it is usable as a URL segment and a plain file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageKey(String);

impl ImageKey {
    pub const MAX_LEN: usize = 128;

    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() || value.len() > Self::MAX_LEN {
            return Err(DomainError::Validation(format!(
                "image key must be 1..={} bytes",
                Self::MAX_LEN
            )));
        }
        if value.starts_with('.') {
            return Err(DomainError::Validation(
                "image key cannot start with '.'".into(),
            ));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
        {
            return Err(DomainError::Validation(
                "image key may only contain ASCII letters, digits, '.', '_' and '-'".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Build a key from a unique stem and an extension. The extension is
    /// expected to come from [`ImageContentType::extension_for`].
    pub fn from_parts(stem: &str, extension: &str) -> DomainResult<Self> {
        Self::parse(format!("{stem}.{extension}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn url_path(&self) -> String {
        format!("/images/{}", self.0)
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageContentType {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageContentType {
    pub const ALLOWED: [Self; 4] = [Self::Jpeg, Self::Png, Self::Gif, Self::Webp];

    pub fn parse(mime: &str) -> DomainResult<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        Self::ALLOWED
            .into_iter()
            .find(|candidate| candidate.mime().eq_ignore_ascii_case(essence))
            .ok_or_else(|| {
                DomainError::Validation(
                    "Invalid file type. Only JPG, PNG, GIF, and WebP are allowed.".into(),
                )
            })
    }

    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }

    pub const fn canonical_extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }

    /// Extension of the uploaded file name when it is a sane one, otherwise
    /// the canonical extension for this content type.
    pub fn extension_for(self, file_name: Option<&str>) -> String {
        const MAX_EXTENSION_LEN: usize = 10;

        file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .filter(|ext| {
                !ext.is_empty()
                    && ext.len() <= MAX_EXTENSION_LEN
                    && ext.bytes().all(|b| b.is_ascii_alphanumeric())
            })
            .map_or_else(
                || self.canonical_extension().to_string(),
                str::to_ascii_lowercase,
            )
    }
}

impl fmt::Display for ImageContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_rejects_traversal_and_separators() {
        assert!(ImageKey::parse("").is_err());
        assert!(ImageKey::parse("../etc/passwd").is_err());
        assert!(ImageKey::parse("a/b.png").is_err());
        assert!(ImageKey::parse(".hidden").is_err());
        assert!(ImageKey::parse("a b.png").is_err());
        assert!(ImageKey::parse("x".repeat(ImageKey::MAX_LEN + 1)).is_err());
        let key = ImageKey::parse("1700000000-abc_def.png").unwrap();
        assert_eq!(key.url_path(), "/images/1700000000-abc_def.png");
    }

    #[test]
    fn content_type_allow_list() {
        assert_eq!(ImageContentType::parse("image/png").unwrap(), ImageContentType::Png);
        assert_eq!(
            ImageContentType::parse("IMAGE/JPEG; charset=binary").unwrap(),
            ImageContentType::Jpeg
        );
        let err = ImageContentType::parse("application/pdf").unwrap_err();
        assert!(err.to_string().contains("Invalid file type"));
        assert!(ImageContentType::parse("image/svg+xml").is_err());
    }

    #[test]
    fn extension_prefers_original_name() {
        let png = ImageContentType::Png;
        assert_eq!(png.extension_for(Some("photo.PNG")), "png");
        assert_eq!(png.extension_for(Some("archive.tar.jpeg")), "jpeg");
        assert_eq!(png.extension_for(Some("noext")), "png");
        assert_eq!(png.extension_for(Some("weird.p/ng")), "png");
        assert_eq!(png.extension_for(Some("trailing.")), "png");
        assert_eq!(ImageContentType::Jpeg.extension_for(None), "jpg");
    }
}
