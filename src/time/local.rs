//! Conversion of stored UTC instants into the event's local timezone.
//!
//! Leads are timestamped in epoch milliseconds (UTC). Anywhere a human
//! reads those timestamps (the CSV export, the admin list), they are
//! rendered in the timezone named by `EVENT_TIMEZONE`.

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Converts an epoch-millisecond instant into the named IANA timezone.
///
/// # Errors
/// Fails when `tz_name` is not a valid IANA timezone identifier or when
/// `millis` is outside the representable range.
pub fn to_local(tz_name: &str, millis: i64) -> Result<DateTime<Tz>> {
    let tz: Tz = tz_name
        .parse()
        .ok()
        .with_context(|| format!("unknown timezone: {tz_name}"))?;
    let utc = Utc
        .timestamp_millis_opt(millis)
        .single()
        .with_context(|| format!("timestamp out of range: {millis}"))?;
    Ok(utc.with_timezone(&tz))
}

/// Formats an epoch-millisecond instant as `DD/MM/YYYY HH:MM` in the
/// named timezone.
pub fn format_local(tz_name: &str, millis: i64) -> Result<String> {
    Ok(to_local(tz_name, millis)?
        .format("%d/%m/%Y %H:%M")
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-11-15T18:30:00Z
    const MILLIS: i64 = 1_731_695_400_000;

    #[test]
    fn converts_to_sao_paulo_time() {
        // Sao Paulo is UTC-3 (no DST since 2019)
        let local = to_local("America/Sao_Paulo", MILLIS).unwrap();
        assert_eq!(local.format("%H:%M").to_string(), "15:30");
    }

    #[test]
    fn formats_day_month_year() {
        let s = format_local("America/Sao_Paulo", MILLIS).unwrap();
        assert_eq!(s, "15/11/2024 15:30");
    }

    #[test]
    fn rejects_unknown_timezone() {
        assert!(to_local("Mars/Olympus_Mons", MILLIS).is_err());
    }
}
