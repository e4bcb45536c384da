//! CORS preflight short-circuit

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};

/// Answer `OPTIONS` immediately with an empty 200, without touching the file system.
/// Returns `None` for every other method.
pub fn preflight_response(method: &Method) -> Option<Response<Full<Bytes>>> {
    (*method == Method::OPTIONS).then(http::build_options_response)
}
