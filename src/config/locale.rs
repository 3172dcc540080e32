//! # Locale Configuration
//!
//! The IANA timezone used whenever a timestamp is shown to a human —
//! currently the registration date column of the leads CSV export.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `EVENT_TIMEZONE` | IANA timezone name | `America/Sao_Paulo` |

use crate::config::env::read_string;

/// Display-timezone configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleConfig {
    /// IANA timezone name, e.g. `"America/Sao_Paulo"`.
    pub timezone: String,
}

impl LocaleConfig {
    /// Builds a [`LocaleConfig`] from environment variables.
    pub fn from_env() -> Self {
        Self {
            timezone: read_string("EVENT_TIMEZONE", "America/Sao_Paulo"),
        }
    }
}
