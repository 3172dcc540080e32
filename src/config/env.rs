//! # Environment Variable Utilities
//!
//! Small helpers for reading typed values out of the process environment,
//! with defaults applied when a variable is missing or unparseable.
//!
//! Used by the configuration loaders (`AppConfig` and friends).
//!
//! # Examples
//! ```rust,no_run
//! use festa_web::config::env::{read_flag, read_u32};
//!
//! let seed = read_flag("SEED_PHOTOS", true);
//! let width = read_u32("IMAGE_GALLERY_MAX_W", 1080);
//! ```

/// Reads a boolean flag from an environment variable.
///
/// Returns `true` for any of the following case-insensitive values:
/// `"1"`, `"true"`, `"yes"`, `"on"`.
pub fn read_flag(name: &str, default: bool) -> bool {
    read_flag_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a boolean flag using a custom provider function.
///
/// Useful for testing without touching the real environment.
///
/// # Example
/// ```rust
/// use festa_web::config::env::read_flag_from;
///
/// assert!(read_flag_from(|_| Some("yes".into()), "SEED_PHOTOS", false));
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = v.trim().trim_matches(|c| c == '"' || c == '\'');
            matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
        }
        None => default,
    }
}

/// Reads a `u32` from an environment variable, falling back to `default`
/// when the variable is absent or not a number.
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_u32_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u32` using a custom provider function.
pub fn read_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Reads a string, falling back to `default` when absent or empty.
pub fn read_string(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}
