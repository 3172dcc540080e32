//! Site settings: branding, event display strings, social links, and
//! tracking identifiers.

use serde::{Deserialize, Serialize};

/// The site settings record.
///
/// Stored as a single document; created implicitly on first save. Saves use
/// merge semantics — fields absent from a patch keep their stored values
/// (see [`SettingsPatch`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Hero banner image: remote URL or inline data URL.
    pub hero_banner_url: String,
    /// Square logo image: remote URL or inline data URL.
    pub logo_url: String,
    pub event_name: String,
    pub event_description: String,
    /// Human-readable date line, e.g. `"15-17 November"`.
    pub event_date_display: String,
    /// Month abbreviation shown on the banner badge.
    pub event_month_banner: String,
    /// Day range shown on the banner badge.
    pub event_day_banner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok_url: Option<String>,
    /// Tracking identifiers, forwarded verbatim to the page head.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_pixel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_tag_manager_id: Option<String>,
    /// Raw script text injected into the page head, unescaped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_head_script: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            hero_banner_url: String::new(),
            logo_url: String::new(),
            event_name: "Festa Brasil".into(),
            event_description: "Three days of rhythm, colour and the energy of real samba.".into(),
            event_date_display: "15-17 November".into(),
            event_month_banner: "NOV".into(),
            event_day_banner: "15-17".into(),
            instagram_url: None,
            facebook_url: None,
            tiktok_url: None,
            facebook_pixel_id: None,
            google_tag_manager_id: None,
            custom_head_script: None,
        }
    }
}

/// A partial settings update. Every field is optional; only present fields
/// overwrite the stored document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_month_banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_day_banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_pixel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_tag_manager_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_head_script: Option<String>,
}

impl SettingsPatch {
    /// A patch that only sets the hero banner URL.
    pub fn banner(url: impl Into<String>) -> Self {
        Self {
            hero_banner_url: Some(url.into()),
            ..Self::default()
        }
    }

    /// A patch that only sets the logo URL.
    pub fn logo(url: impl Into<String>) -> Self {
        Self {
            logo_url: Some(url.into()),
            ..Self::default()
        }
    }
}
