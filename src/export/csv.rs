//! # Leads CSV Export
//!
//! Renders the lead list as a CSV document for download from the admin
//! panel. Fields follow RFC 4180: values containing commas, quotes, or
//! line breaks are quoted, with embedded quotes doubled. Timestamps are
//! rendered in the event's local timezone.

use anyhow::Result;

use crate::model::Lead;
use crate::time::local::format_local;

const HEADER: &str = "ID,Name,Email,Phone,Registered";

/// Builds the CSV body for the given leads.
///
/// # Errors
/// Fails when `tz_name` is not a valid IANA timezone identifier.
pub fn leads_csv(leads: &[Lead], tz_name: &str) -> Result<String> {
    let mut out = String::from(HEADER);
    out.push_str("\r\n");
    for lead in leads {
        let registered = format_local(tz_name, lead.created_at)?;
        let row = [
            lead.id.as_str(),
            lead.name.as_str(),
            lead.email.as_str(),
            lead.phone.as_str(),
            registered.as_str(),
        ]
        .map(escape)
        .join(",");
        out.push_str(&row);
        out.push_str("\r\n");
    }
    Ok(out)
}

/// Quotes a field when RFC 4180 requires it.
fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
