//! # Image Processing Configuration
//!
//! Maximum output widths for each upload call site, plus the JPEG quality
//! used when re-encoding lossy images.
//!
//! The defaults mirror the product's fixed values (square logo 800 px,
//! gallery photo 1080 px, hero banner 1920 px, quality 70) but each is
//! overridable through the environment so they stay product choices rather
//! than hardcoded constants.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `IMAGE_LOGO_MAX_W` | Max width for the square logo | `800` |
//! | `IMAGE_GALLERY_MAX_W` | Max width for gallery photos | `1080` |
//! | `IMAGE_BANNER_MAX_W` | Max width for the hero banner | `1920` |
//! | `IMAGE_JPEG_QUALITY` | JPEG quality (1-100) for lossy re-encoding | `70` |

use crate::config::env::read_u32;

/// Per-call-site resize bounds and encoder quality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageConfig {
    /// Max width for the square logo upload.
    pub logo_max_w: u32,
    /// Max width for gallery photo uploads.
    pub gallery_max_w: u32,
    /// Max width for the hero banner upload.
    pub banner_max_w: u32,
    /// JPEG quality (1-100) applied when the source has no alpha channel.
    pub jpeg_quality: u8,
}

impl ImageConfig {
    /// Loads the image configuration from environment variables, applying
    /// the product defaults where unset. Quality is clamped to 1-100.
    pub fn from_env() -> Self {
        Self {
            logo_max_w: read_u32("IMAGE_LOGO_MAX_W", 800),
            gallery_max_w: read_u32("IMAGE_GALLERY_MAX_W", 1080),
            banner_max_w: read_u32("IMAGE_BANNER_MAX_W", 1920),
            jpeg_quality: read_u32("IMAGE_JPEG_QUALITY", 70).clamp(1, 100) as u8,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            logo_max_w: 800,
            gallery_max_w: 1080,
            banner_max_w: 1920,
            jpeg_quality: 70,
        }
    }
}
