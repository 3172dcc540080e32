//! Encoding of binary images as `data:` URLs.
//!
//! Downscaled photos, banners, and logos are stored inline in the document
//! store as `data:<mime>;base64,<payload>` strings, so a document fetch is
//! all a page render needs.

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Wraps encoded image bytes in a `data:` URL.
///
/// # Example
/// ```
/// use festa_web::image::data_url;
///
/// let url = data_url::encode("image/png", &[1, 2, 3]);
/// assert!(url.starts_with("data:image/png;base64,"));
/// ```
pub fn encode(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}

/// Splits a `data:` URL back into its content type and raw bytes.
///
/// # Errors
/// Fails when the string is not a base64 `data:` URL.
pub fn decode(url: &str) -> Result<(String, Vec<u8>)> {
    let Some(rest) = url.strip_prefix("data:") else {
        bail!("not a data URL");
    };
    let Some((content_type, payload)) = rest.split_once(";base64,") else {
        bail!("not a base64 data URL");
    };
    let bytes = STANDARD.decode(payload).context("decode base64 payload")?;
    Ok((content_type.to_string(), bytes))
}
