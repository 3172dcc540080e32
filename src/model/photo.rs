//! Gallery photo records shown in the public carousel.

use serde::{Deserialize, Serialize};

/// A carousel photo.
///
/// `url` is either a remote image URL or an inline data URL produced by the
/// downscaler; the display layer renders it directly as an image source
/// either way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub title: String,
    /// Controls inclusion in the public carousel.
    pub active: bool,
}
