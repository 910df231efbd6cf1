//! Picked image handling
//!
//! The camera/photo-library collaborator hands over raw image bytes with
//! their pixel size. Decks embed the bytes as a base64 `data:` URI and
//! store the size as a `"W/H"` aspect ratio.

use crate::config::DEFAULT_IMAGE_MIME;
use crate::models::{AspectRatio, ImageRef};
use base64::{engine::general_purpose::STANDARD, Engine as _};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Image returned by a completed camera capture or library pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl PickedImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// PNG is recognised by its signature; everything else is treated as JPEG
    pub fn mime_type(&self) -> &'static str {
        if self.data.starts_with(PNG_SIGNATURE) {
            "image/png"
        } else {
            DEFAULT_IMAGE_MIME
        }
    }

    /// Value stored in a deck's `image` field
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), STANDARD.encode(&self.data))
    }

    /// Value stored in a deck's `aspect` field
    pub fn aspect(&self) -> AspectRatio {
        AspectRatio::new(self.width, self.height)
    }
}

/// Raw bytes of an embedded deck image.
///
/// Returns `None` for empty images, built-in assets and undecodable payloads.
pub fn decode_embedded(image: &str) -> Option<Vec<u8>> {
    match ImageRef::parse(image) {
        ImageRef::Embedded { data, .. } => match STANDARD.decode(data) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!("Embedded image is not valid base64: {}", e);
                None
            }
        },
        ImageRef::None | ImageRef::Asset(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_data_uri() {
        let image = PickedImage::new(vec![0xff, 0xd8, 0xff, 0xe0], 640, 480);

        assert_eq!(image.to_data_uri(), "data:image/jpeg;base64,/9j/4A==");
        assert_eq!(image.aspect().to_string(), "640/480");
    }

    #[test]
    fn test_png_detected() {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend_from_slice(b"rest");
        let image = PickedImage::new(data, 1, 1);

        assert_eq!(image.mime_type(), "image/png");
        assert!(image.to_data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_decode_embedded() {
        let image = PickedImage::new(b"pixels".to_vec(), 2, 3);

        assert_eq!(
            decode_embedded(&image.to_data_uri()),
            Some(b"pixels".to_vec())
        );
        assert_eq!(decode_embedded("adaptive-icon"), None);
        assert_eq!(decode_embedded(""), None);
        assert_eq!(decode_embedded("data:image/jpeg;base64,***"), None);
    }
}
