/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Format a timestamp as DD.MM.YYYY
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// Optional timestamp as DD.MM.YYYY, or "-"
pub fn format_date_opt(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_date).unwrap_or_else(|| "-".to_string())
}
