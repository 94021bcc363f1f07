// library/httpdate.rs

//! HTTP time format (RFC 7231 IMF-fixdate), e.g. `Mon, 02 Jan 2006 15:04:05 GMT`.
//!
//! The version string of a release is the UTC build time in this format.

use chrono::{DateTime, Utc};

/// chrono format string for IMF-fixdate. Always 29 characters wide.
pub const HTTP_TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Formats a UTC timestamp as an HTTP date.
pub fn format_http_date(time: &DateTime<Utc>) -> String {
    time.format(HTTP_TIME_FORMAT).to_string()
}

/// The version string for a release built right now.
pub fn current_version() -> String {
    format_http_date(&Utc::now())
}
