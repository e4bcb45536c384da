//! Access log line format
//!
//! Lines follow the classic static-server layout:
//! `$remote_addr - - [$time] "$request" $status -`

use chrono::{DateTime, Local};
use hyper::StatusCode;
use std::net::IpAddr;

/// Access log entry for a single completed request
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: IpAddr,
    /// Time the response was produced
    pub time: DateTime<Local>,
    /// Request line, e.g. `GET /doc.pdf HTTP/1.1`
    pub request_line: String,
    /// Response status
    pub status: StatusCode,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: IpAddr, request_line: String, status: StatusCode) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            request_line,
            status,
        }
    }

    /// Status arguments as they appear at the end of the line
    pub fn status_args(&self) -> String {
        render_status_args(self.status)
    }

    pub fn format(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y %H:%M:%S"),
            self.request_line,
            self.status_args(),
        )
    }
}

/// Status code followed by the size placeholder, which is always `-`
pub fn render_status_args(status: StatusCode) -> String {
    format!("{} -", status.as_u16())
}
