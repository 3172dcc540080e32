//! # Image Downscaler Implementation (image-rs)
//!
//! Provides an [`ImageProcessor`] implementation using the [`image`] crate.
//!
//! The backend decodes the payload, shrinks it proportionally when the width
//! exceeds the bound, and re-encodes:
//! - Formats that can carry transparency (**PNG**, **GIF**, **WebP**) are
//!   re-encoded losslessly in their declared format, keeping the alpha channel.
//! - Everything else becomes **JPEG** at a configurable quality.
//!
//! Which path is taken is decided by the *declared* content type, not by
//! sniffing the payload.
//!
//! # Supported Content Types
//! - `image/jpeg`
//! - `image/jpg`
//! - `image/png`
//! - `image/gif`
//! - `image/webp`
//!
//! # Example
//! ```rust,no_run
//! use festa_web::image::image_rs_processor::ImageRsProcessor;
//! use festa_web::image::processor::ImageProcessor;
//!
//! let processor = ImageRsProcessor::new(70);
//! let img_data = std::fs::read("input.jpg").unwrap();
//!
//! if processor.is_supported("image/jpeg") {
//!     let out = processor
//!         .downscale(&img_data, "image/jpeg", 1080)
//!         .expect("downscale ok");
//!     std::fs::write("out.jpg", out.bytes).unwrap();
//! }
//! ```

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{
    imageops::FilterType, ColorType, DynamicImage, ExtendedColorType, GenericImageView,
    ImageFormat, ImageReader,
};

use super::processor::{DownscaledImage, ImageError, ImageProcessor};

/// A concrete implementation of [`ImageProcessor`] using the `image` crate.
#[derive(Clone, Debug)]
pub struct ImageRsProcessor {
    jpeg_quality: u8,
}

impl ImageRsProcessor {
    /// Creates a processor that encodes lossy output at the given JPEG
    /// quality (1..=100).
    pub fn new(jpeg_quality: u8) -> Self {
        Self {
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    /// Returns `true` if the given MIME type is supported.
    pub fn is_supported(&self, content_type: &str) -> bool {
        matches!(
            content_type.to_ascii_lowercase().as_str(),
            "image/gif" | "image/jpeg" | "image/jpg" | "image/png" | "image/webp"
        )
    }

    /// Downscales an image to fit within `max_w` and re-encodes it.
    ///
    /// Never upscales: a payload already at or under the bound keeps its
    /// pixel dimensions and is only re-encoded.
    pub fn downscale(
        &self,
        img_bytes: &[u8],
        content_type: &str,
        max_w: u32,
    ) -> Result<DownscaledImage, ImageError> {
        let declared = content_type.to_ascii_lowercase();
        let lossless = match declared.as_str() {
            "image/png" => Some(ImageFormat::Png),
            "image/gif" => Some(ImageFormat::Gif),
            "image/webp" => Some(ImageFormat::WebP),
            "image/jpeg" | "image/jpg" => None,
            _ => {
                return Err(ImageError::Unsupported {
                    content_type: content_type.to_string(),
                })
            }
        };

        let img = ImageReader::new(Cursor::new(img_bytes))
            .with_guessed_format()
            .map_err(|e| ImageError::Decode(image::ImageError::IoError(e)))?
            .decode()
            .map_err(ImageError::Decode)?;

        let resized = resize_width(img, max_w);
        let (w, h) = resized.dimensions();

        let mut out = Vec::new();
        let mut cur = Cursor::new(&mut out);

        let out_type = match lossless {
            Some(ImageFormat::Png) => {
                let rgba = resized.to_rgba8();
                image::write_buffer_with_format(
                    &mut cur,
                    &rgba,
                    w,
                    h,
                    ColorType::Rgba8,
                    ImageFormat::Png,
                )
                .map_err(ImageError::Encode)?;
                "image/png"
            }
            Some(fmt) => {
                // GIF and WebP encoders want the full DynamicImage path.
                let rgba = resized.to_rgba8();
                DynamicImage::ImageRgba8(rgba)
                    .write_to(&mut cur, fmt)
                    .map_err(ImageError::Encode)?;
                match fmt {
                    ImageFormat::Gif => "image/gif",
                    _ => "image/webp",
                }
            }
            None => {
                let rgb = resized.to_rgb8();
                let mut encoder = JpegEncoder::new_with_quality(&mut cur, self.jpeg_quality);
                encoder
                    .encode(&rgb, w, h, ExtendedColorType::Rgb8)
                    .map_err(ImageError::Encode)?;
                "image/jpeg"
            }
        };

        Ok(DownscaledImage {
            bytes: out,
            content_type: out_type.to_string(),
            width: w,
            height: h,
        })
    }
}

impl ImageProcessor for ImageRsProcessor {
    fn is_supported(&self, content_type: &str) -> bool {
        ImageRsProcessor::is_supported(self, content_type)
    }
    fn downscale(
        &self,
        img_bytes: &[u8],
        content_type: &str,
        max_w: u32,
    ) -> Result<DownscaledImage, ImageError> {
        ImageRsProcessor::downscale(self, img_bytes, content_type, max_w)
    }
}

/// Shrinks the image proportionally so its width does not exceed `max_w`.
///
/// The new height is the rounded proportional value, so the aspect ratio
/// survives within a pixel. Uses [`FilterType::Triangle`] for quality-speed
/// balance.
fn resize_width(img: DynamicImage, max_w: u32) -> DynamicImage {
    let (w, h) = img.dimensions();
    if w <= max_w {
        return img;
    }
    let new_h = ((max_w as f64) * (h as f64) / (w as f64)).round() as u32;
    img.resize_exact(max_w, new_h.max(1), FilterType::Triangle)
}
