//! HTTP cache validation module
//!
//! `Last-Modified` generation and `If-Modified-Since` handling. Comparisons use
//! whole seconds since HTTP dates carry no sub-second part.

use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a timestamp as an HTTP date
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(HTTP_DATE_FORMAT).to_string()
}

/// Parse an HTTP date, returning `None` when it is not a valid date
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Check whether the client's copy is still current (should return 304)
///
/// `If-None-Match` takes precedence: when the client sent one, the date is
/// ignored, since no entity tags are issued here.
pub fn is_not_modified(
    if_modified_since: Option<&str>,
    if_none_match: Option<&str>,
    modified: SystemTime,
) -> bool {
    if if_none_match.is_some() {
        return false;
    }
    let Some(since) = if_modified_since.and_then(parse_http_date) else {
        return false;
    };
    DateTime::<Utc>::from(modified).timestamp() <= since.timestamp()
}
