//! Logger module
//!
//! Console logging for the file server:
//! - Startup banner and shutdown notice on stdout
//! - Errors and warnings on stderr
//! - Filtered access log on stderr

mod filter;
mod format;

pub use filter::should_log_access;
pub use format::{render_status_args, AccessLogEntry};

/// Write to stdout
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to stderr
fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(port: u16, url: &str) {
    write_info(&format!("Serving with CORS on port {port}"));
    write_info(&format!("Files available at: {url}"));
    write_info("Press Ctrl+C to stop");
}

pub fn log_server_stop() {
    write_info("\nServer stopped");
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    write_error(&format!("[ERROR] Failed to serve connection: {err}"));
}

/// Log one completed request
pub fn log_access(entry: &AccessLogEntry) {
    write_error(&entry.format());
}
