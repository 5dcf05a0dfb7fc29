// =============================================================================
// Talevo Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Markup Utilities
// 3. Format Utilities
// =============================================================================

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Current vertical scroll offset of the window, in CSS pixels.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Lock or release page scrolling while a modal is open.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let overflow = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", overflow) {
        log::warn!("Failed to set body overflow: {:?}", e);
    }
}

// -----------------------------------------------------------------------------
// 2. Markup Utilities
// -----------------------------------------------------------------------------

/// Escape text for insertion into HTML element content or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// -----------------------------------------------------------------------------
// 3. Format Utilities
// -----------------------------------------------------------------------------

const TR_DATE: &str = "%d.%m.%Y";

/// Format a CRM timestamp the way `tr-TR` dates read (`05.03.2024`).
///
/// Offset-carrying timestamps are shifted into `tz`; naive ones are taken
/// as already local. Returns `None` for anything unparseable.
pub fn format_tr_date<Tz>(raw: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let raw = raw.trim();

    if let Ok(dt) = raw.parse::<DateTime<FixedOffset>>() {
        return Some(dt.with_timezone(tz).format(TR_DATE).to_string());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).format(TR_DATE).to_string());
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive.format(TR_DATE).to_string());
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date.format(TR_DATE).to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<img src=x onerror="alert('x')">"#),
            "&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt;"
        );
        assert_eq!(escape_html("Ar-Ge & İnovasyon"), "Ar-Ge &amp; İnovasyon");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_format_tr_date_rfc3339() {
        assert_eq!(format_tr_date("2024-03-05T10:00:00Z", &Utc).as_deref(), Some("05.03.2024"));
        assert_eq!(
            format_tr_date("2024-03-05T23:30:00.123456-02:00", &Utc).as_deref(),
            Some("06.03.2024")
        );
    }

    #[test]
    fn test_format_tr_date_naive_forms() {
        assert_eq!(format_tr_date("2025-11-20T08:15:00", &Utc).as_deref(), Some("20.11.2025"));
        assert_eq!(format_tr_date("2025-01-02", &Utc).as_deref(), Some("02.01.2025"));
    }

    #[test]
    fn test_format_tr_date_rejects_garbage() {
        assert_eq!(format_tr_date("dün", &Utc), None);
        assert_eq!(format_tr_date("", &Utc), None);
    }
}
