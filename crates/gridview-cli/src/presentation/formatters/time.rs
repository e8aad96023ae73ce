use chrono::{DateTime, Utc};

/// Shorten an RFC3339 timestamp to its date part ("2025-05-04");
/// non-timestamp values pass through unchanged
pub fn short_date(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Format an RFC3339 timestamp as relative time ("3 days ago")
pub fn format_relative_time(value: &str) -> String {
    let parsed = match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return value.to_string(),
    };

    let elapsed = Utc::now().signed_duration_since(parsed);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 30 {
        format!("{} days ago", days)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}
