//! Image downscaling: backend abstraction, the image-rs backend, and the
//! inline data-URL pipeline used by admin uploads.

pub mod data_url;
pub mod image_rs_processor;
pub mod inline;
pub mod processor;

pub use image_rs_processor::ImageRsProcessor;
pub use inline::InlineImageService;
pub use processor::{DownscaledImage, ImageError, ImageProcessor};
