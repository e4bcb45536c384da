//! HTTP response building module
//!
//! Builders for every response the file server produces. A builder error is
//! logged and degrades to a bare response rather than panicking.

use crate::http::range::ByteRange;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::CONTENT_RANGE;
use hyper::{Method, Response, StatusCode};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Build OPTIONS response (preflight request): 200 with an empty body
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Length", 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build an HTML error page for `status`
pub fn build_error_response(
    status: StatusCode,
    message: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let page = error_page(status, message);
    let content_length = page.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(page)
    };

    Response::builder()
        .status(status)
        .header("Content-Type", HTML_CONTENT_TYPE)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response(message: &str, is_head: bool) -> Response<Full<Bytes>> {
    build_error_response(StatusCode::NOT_FOUND, message, is_head)
}

/// Build 501 Not Implemented response for a method the file server can't handle
pub fn build_501_response(method: &Method) -> Response<Full<Bytes>> {
    build_error_response(
        StatusCode::NOT_IMPLEMENTED,
        &format!("Unsupported method ('{method}')"),
        false,
    )
}

/// Build 416 Range Not Satisfiable response
pub fn build_416_response(file_size: usize, is_head: bool) -> Response<Full<Bytes>> {
    let mut response =
        build_error_response(StatusCode::RANGE_NOT_SATISFIABLE, "Range Not Satisfiable", is_head);
    if let Ok(value) = format!("bytes */{file_size}").parse() {
        response.headers_mut().insert(CONTENT_RANGE, value);
    }
    response
}

/// Build 301 redirect, used to add the trailing slash to directory URLs
pub fn build_redirect_response(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header("Location", location)
        .header("Content-Length", 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(last_modified: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header("Last-Modified", last_modified)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build generic HTML response
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", HTML_CONTENT_TYPE)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response carrying a whole file
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    last_modified: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Last-Modified", last_modified)
        .header("Accept-Ranges", "bytes")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 206 Partial Content response; `data` is the whole file
pub fn build_partial_response(
    data: &Bytes,
    range: ByteRange,
    content_type: &str,
    last_modified: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        data.slice(range.start..=range.end)
    };

    Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header("Content-Type", content_type)
        .header("Content-Length", range.length())
        .header("Content-Range", range.content_range(data.len()))
        .header("Last-Modified", last_modified)
        .header("Accept-Ranges", "bytes")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("206", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Escape text for inclusion in HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn error_page(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    let explain = status.canonical_reason().unwrap_or("Unknown");
    format!(
        "<!DOCTYPE HTML>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Error response</title>\n\
         </head>\n\
         <body>\n\
         <h1>Error response</h1>\n\
         <p>Error code: {code}</p>\n\
         <p>Message: {}.</p>\n\
         <p>Error code explanation: {code} - {}.</p>\n\
         </body>\n\
         </html>\n",
        escape_html(message),
        escape_html(explain),
    )
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
