use bytes::Bytes;

/// Content type used when the bytes carry no recognizable signature
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Photo payload accompanying a new listing.
///
/// Only the derived key survives into the listing; the payload itself lives in
/// the blob store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    name: String,
    content_type: String,
    content: Bytes,
}

impl Photo {
    /// Build a photo, sniffing its content type from the leading bytes
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let content = content.into();
        let content_type = infer::get(&content)
            .map(|kind| kind.mime_type())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        Self {
            name: name.into(),
            content_type,
            content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

    #[test]
    fn test_photo_detects_png() {
        let photo = Photo::new("a.png", PNG_SIGNATURE.to_vec());
        assert_eq!(photo.content_type(), "image/png");
        assert_eq!(photo.size_bytes(), PNG_SIGNATURE.len());
    }

    #[test]
    fn test_photo_detects_jpeg() {
        let photo = Photo::new("a.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10]);
        assert_eq!(photo.content_type(), "image/jpeg");
    }

    #[test]
    fn test_photo_unknown_content_falls_back() {
        let photo = Photo::new("1.png", b"123".to_vec());
        assert_eq!(photo.content_type(), FALLBACK_CONTENT_TYPE);
        assert_eq!(photo.name(), "1.png");
    }
}
