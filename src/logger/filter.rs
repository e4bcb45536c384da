//! Access log filter
//!
//! Only successful or PDF-related GET requests are worth a line when testing
//! PDFs in the browser. Everything else is dropped.

/// Decide whether a completed request is logged.
///
/// Both checks are plain substring matches: `request_line` must contain `GET`,
/// and either `path` contains `.pdf` or `status_args` contains `200`.
/// A path or status that merely contains those characters also matches.
pub fn should_log_access(request_line: &str, path: &str, status_args: &str) -> bool {
    request_line.contains("GET") && (path.contains(".pdf") || status_args.contains("200"))
}
