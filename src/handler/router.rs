//! Request dispatch module
//!
//! Entry point for HTTP request processing. Composes the preflight
//! short-circuit, the static file handler and the CORS decorator, then runs
//! the access-log filter on the finished response.

use crate::config::ServerConfig;
use crate::handler::{cors, preflight, static_files};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<ServerConfig>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, _body) = req.into_parts();
    let response = respond(&config, &parts).await;

    if let Some(entry) = access_entry(remote_addr.ip(), &parts, response.status()) {
        logger::log_access(&entry);
    }
    Ok(response)
}

/// Produce the response for a request: preflight or static file, always with CORS headers
pub async fn respond(config: &ServerConfig, parts: &Parts) -> Response<Full<Bytes>> {
    cors::with_cors(async {
        if let Some(response) = preflight::preflight_response(&parts.method) {
            return response;
        }
        static_files::serve(config, parts).await
    })
    .await
}

/// Build the access log entry for a finished request, if the filter lets it through
pub fn access_entry(
    remote_addr: IpAddr,
    parts: &Parts,
    status: StatusCode,
) -> Option<AccessLogEntry> {
    let request_line = format!("{} {} {:?}", parts.method, parts.uri, parts.version);
    let status_args = logger::render_status_args(status);

    logger::should_log_access(&request_line, parts.uri.path(), &status_args)
        .then(|| AccessLogEntry::new(remote_addr, request_line, status))
}
