//! CORS header injection
//!
//! Every response leaves the server with the same permissive header set,
//! whatever its method or status.

use hyper::header::{HeaderName, HeaderValue};
use hyper::Response;

/// Header set added to every response
pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "*"),
    ("access-control-allow-credentials", "true"),
];

/// Set the CORS headers on `response`, replacing any existing values
pub fn apply_cors_headers<B>(response: &mut Response<B>) {
    let headers = response.headers_mut();
    for (name, value) in CORS_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

/// Wrap a response producer so its output always carries the CORS headers
pub async fn with_cors<B, F>(produce: F) -> Response<B>
where
    F: std::future::Future<Output = Response<B>>,
{
    let mut response = produce.await;
    apply_cors_headers(&mut response);
    response
}
