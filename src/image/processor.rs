//! # Image Downscaling Abstractions
//!
//! Defines a generic interface for bounded-width image downscaling.
//!
//! This module provides:
//! - [`DownscaledImage`] — the result of a downscale: encoded bytes plus the
//!   output content type and final pixel dimensions.
//! - [`ImageError`] — the failure taxonomy for downscaling.
//! - [`ImageProcessor`] — a trait abstraction that allows different
//!   image processing backends (e.g. `image-rs`, `magick-rs`, etc.).
//!
//! It enables backend-agnostic implementations, so you can plug in different
//! image libraries while keeping a consistent API across your application.
//!
//! # Example
//! ```rust
//! use festa_web::image::processor::{DownscaledImage, ImageError, ImageProcessor};
//!
//! struct DummyProcessor;
//!
//! impl ImageProcessor for DummyProcessor {
//!     fn is_supported(&self, content_type: &str) -> bool {
//!         content_type.starts_with("image/")
//!     }
//!
//!     fn downscale(
//!         &self,
//!         img_bytes: &[u8],
//!         content_type: &str,
//!         _max_w: u32,
//!     ) -> Result<DownscaledImage, ImageError> {
//!         Ok(DownscaledImage {
//!             bytes: img_bytes.to_vec(),
//!             content_type: content_type.to_string(),
//!             width: 1,
//!             height: 1,
//!         })
//!     }
//! }
//!
//! let processor = DummyProcessor;
//! assert!(processor.is_supported("image/png"));
//! let out = processor.downscale(b"abc", "image/png", 800).unwrap();
//! assert_eq!(out.bytes, b"abc");
//! ```

use thiserror::Error;

/// The result of a downscale operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownscaledImage {
    /// Encoded image data.
    pub bytes: Vec<u8>,
    /// MIME type of the encoded data (may differ from the input type when
    /// the backend re-encodes to JPEG).
    pub content_type: String,
    /// Final width in pixels.
    pub width: u32,
    /// Final height in pixels.
    pub height: u32,
}

/// Errors produced while downscaling an image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The declared content type is not one the backend can handle.
    #[error("unsupported content-type: {content_type}")]
    Unsupported { content_type: String },

    /// The payload could not be decoded as an image.
    #[error("failed to decode image")]
    Decode(#[source] image::ImageError),

    /// Re-encoding the resized image failed.
    #[error("failed to encode image")]
    Encode(#[source] image::ImageError),
}

/// Trait defining common image downscaling behavior.
///
/// Implementors handle format support detection and bounded-width resizing.
/// This allows flexible backend implementations (e.g. using `image` crate,
/// `imageproc`, or native bindings).
pub trait ImageProcessor: Send + Sync {
    /// Returns `true` if the given MIME content type is supported.
    fn is_supported(&self, content_type: &str) -> bool;

    /// Downscales an image so its width does not exceed `max_w`, preserving
    /// aspect ratio. Images already within the bound keep their dimensions.
    ///
    /// # Arguments
    /// - `img_bytes`: Raw image data.
    /// - `content_type`: Declared MIME type (e.g. `"image/png"`).
    /// - `max_w`: Maximum allowed width in pixels.
    fn downscale(
        &self,
        img_bytes: &[u8],
        content_type: &str,
        max_w: u32,
    ) -> Result<DownscaledImage, ImageError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock implementation for testing trait behavior.
    #[derive(Default)]
    struct MockImageProcessor {
        calls: Mutex<Vec<(String, u32)>>,
    }

    impl ImageProcessor for MockImageProcessor {
        fn is_supported(&self, content_type: &str) -> bool {
            content_type.to_ascii_lowercase().starts_with("image/")
        }

        fn downscale(
            &self,
            img_bytes: &[u8],
            content_type: &str,
            max_w: u32,
        ) -> Result<DownscaledImage, ImageError> {
            self.calls
                .lock()
                .unwrap()
                .push((content_type.to_string(), max_w));
            Ok(DownscaledImage {
                bytes: img_bytes.to_vec(),
                content_type: content_type.to_string(),
                width: max_w,
                height: max_w,
            })
        }
    }

    /// Confirms ImageProcessor correctly detects supported types and records calls.
    #[test]
    fn mock_image_processor_support_detection_and_downscale() {
        let mock = Arc::new(MockImageProcessor::default());
        let proc_obj: Arc<dyn ImageProcessor> = mock.clone();

        assert!(proc_obj.is_supported("image/png"));
        assert!(proc_obj.is_supported("IMAGE/JPEG"));
        assert!(!proc_obj.is_supported("text/plain"));

        let input = b"dummy_bytes".to_vec();
        let out = proc_obj
            .downscale(&input, "image/png", 800)
            .expect("downscale ok");
        assert_eq!(out.bytes, input);
        assert_eq!(out.content_type, "image/png");

        let calls = mock.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "image/png");
        assert_eq!(calls[0].1, 800);
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = ImageError::Unsupported {
            content_type: "text/plain".into(),
        };
        assert_eq!(err.to_string(), "unsupported content-type: text/plain");
    }

    /// Ensures the trait object is Send + Sync.
    fn assert_send_sync<T: ?Sized + Send + Sync>() {}
    #[test]
    fn dyn_image_processor_is_send_sync() {
        assert_send_sync::<dyn ImageProcessor>();
    }
}
