//! # Inline Image Service
//!
//! Turns uploaded image payloads into store-ready `data:` URLs.
//!
//! Each upload site on the admin panel has its own width bound
//! (see [`ImageConfig`](crate::config::image::ImageConfig)):
//! - gallery photos
//! - the hero banner
//! - the event logo
//!
//! The service downscales through an [`ImageProcessor`] and wraps the result
//! with [`data_url::encode`]. Nothing is persisted here; callers store the
//! returned URL.

use std::sync::Arc;

use crate::config::image::ImageConfig;
use crate::image::data_url;
use crate::image::processor::{ImageError, ImageProcessor};

/// Downscales uploads and inlines them as `data:` URLs.
#[derive(Clone)]
pub struct InlineImageService {
    processor: Arc<dyn ImageProcessor>,
    config: ImageConfig,
}

impl InlineImageService {
    pub fn new(processor: Arc<dyn ImageProcessor>, config: ImageConfig) -> Self {
        Self { processor, config }
    }

    /// Returns `true` if the given MIME content type is supported.
    pub fn is_supported(&self, content_type: &str) -> bool {
        self.processor.is_supported(content_type)
    }

    /// Prepares a gallery photo upload.
    pub fn gallery_photo(&self, bytes: &[u8], content_type: &str) -> Result<String, ImageError> {
        self.inline(bytes, content_type, self.config.gallery_max_w)
    }

    /// Prepares a hero banner upload.
    pub fn banner(&self, bytes: &[u8], content_type: &str) -> Result<String, ImageError> {
        self.inline(bytes, content_type, self.config.banner_max_w)
    }

    /// Prepares an event logo upload.
    pub fn logo(&self, bytes: &[u8], content_type: &str) -> Result<String, ImageError> {
        self.inline(bytes, content_type, self.config.logo_max_w)
    }

    fn inline(&self, bytes: &[u8], content_type: &str, max_w: u32) -> Result<String, ImageError> {
        let out = self.processor.downscale(bytes, content_type, max_w)?;
        Ok(data_url::encode(&out.content_type, &out.bytes))
    }
}
