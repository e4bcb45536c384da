//! Static file serving module
//!
//! Resolves request paths under the configured root and answers `GET`/`HEAD`
//! with file contents, directory index pages or generated listings.

use crate::config::ServerConfig;
use crate::handler::listing;
use crate::http::{self, cache, mime, path, RangeParseResult};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderName, IF_MODIFIED_SINCE, IF_NONE_MATCH, RANGE};
use hyper::http::request::Parts;
use hyper::{Method, Response};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncReadExt;

/// Served in place of a listing when present
const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

const FILE_NOT_FOUND: &str = "File not found";

/// Serve a request from the configured root
pub async fn serve(config: &ServerConfig, parts: &Parts) -> Response<Full<Bytes>> {
    let is_head = match parts.method {
        Method::GET => false,
        Method::HEAD => true,
        ref other => return http::build_501_response(other),
    };

    let target = path::translate_path(&config.root, parts.uri.path());
    match fs::metadata(&target.fs_path).await {
        Ok(meta) if meta.is_dir() => serve_directory(parts, &target.fs_path, is_head).await,
        // A file asked for as a directory
        Ok(_) if target.trailing_slash => http::build_404_response(FILE_NOT_FOUND, is_head),
        Ok(_) => serve_file(parts, &target.fs_path, is_head).await,
        Err(_) => http::build_404_response(FILE_NOT_FOUND, is_head),
    }
}

/// Redirect to the slash form, then serve an index file or a listing
async fn serve_directory(parts: &Parts, dir: &Path, is_head: bool) -> Response<Full<Bytes>> {
    let request_path = parts.uri.path();
    if !request_path.ends_with('/') {
        let location = match parts.uri.query() {
            Some(query) => format!("{request_path}/?{query}"),
            None => format!("{request_path}/"),
        };
        return http::build_redirect_response(&location);
    }

    for index in INDEX_FILES {
        let candidate = dir.join(index);
        if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
            return serve_file(parts, &candidate, is_head).await;
        }
    }

    match listing::read_entries(dir).await {
        Ok(entries) => {
            let page = listing::render_listing(&path::decode_path(request_path), &entries);
            http::response::build_html_response(page, is_head)
        }
        Err(_) => http::build_404_response("No permission to list directory", is_head),
    }
}

/// Serve one regular file, honoring `If-Modified-Since` and `Range`
async fn serve_file(parts: &Parts, file_path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    let Ok(mut file) = fs::File::open(file_path).await else {
        return http::build_404_response(FILE_NOT_FOUND, is_head);
    };
    let Ok(modified) = file.metadata().await.and_then(|m| m.modified()) else {
        return http::build_404_response(FILE_NOT_FOUND, is_head);
    };

    let last_modified = cache::format_http_date(modified);
    if cache::is_not_modified(
        header_str(parts, &IF_MODIFIED_SINCE),
        header_str(parts, &IF_NONE_MATCH),
        modified,
    ) {
        return http::build_304_response(&last_modified);
    }

    let mut content = Vec::new();
    if let Err(e) = file.read_to_end(&mut content).await {
        logger::log_warning(&format!(
            "Failed to read file '{}': {e}",
            file_path.display()
        ));
        return http::build_404_response(FILE_NOT_FOUND, is_head);
    }

    let data = Bytes::from(content);
    let content_type = mime::content_type_for(file_path);
    match http::parse_range_header(header_str(parts, &RANGE), data.len()) {
        RangeParseResult::Valid(range) => http::response::build_partial_response(
            &data,
            range,
            content_type,
            &last_modified,
            is_head,
        ),
        RangeParseResult::NotSatisfiable => http::build_416_response(data.len(), is_head),
        RangeParseResult::None => {
            http::response::build_file_response(data, content_type, &last_modified, is_head)
        }
    }
}

fn header_str<'a>(parts: &'a Parts, name: &HeaderName) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::{Request, StatusCode};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\n%%EOF\n";

    fn config_for(root: PathBuf) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
            root,
        }
    }

    fn fixture() -> (TempDir, ServerConfig) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("test.pdf"), PDF_BYTES).unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs").join("notes.txt"), b"notes").unwrap();
        let config = config_for(dir.path().to_path_buf());
        (dir, config)
    }

    fn parts(method: Method, uri: &str) -> Parts {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_get_existing_file() {
        let (_dir, config) = fixture();
        let response = serve(&config, &parts(Method::GET, "/test.pdf")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/pdf");
        assert!(response.headers().contains_key("last-modified"));
        assert_eq!(body_bytes(response).await.as_ref(), PDF_BYTES);
    }

    #[tokio::test]
    async fn test_head_has_headers_without_body() {
        let (_dir, config) = fixture();
        let response = serve(&config, &parts(Method::HEAD, "/test.pdf")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-length"],
            PDF_BYTES.len().to_string().as_str()
        );
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let (_dir, config) = fixture();
        let response = serve(&config, &parts(Method::GET, "/does-not-exist.pdf")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_file_with_trailing_slash_is_404() {
        let (_dir, config) = fixture();
        let response = serve(&config, &parts(Method::GET, "/test.pdf/")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_is_not_implemented() {
        let (_dir, config) = fixture();
        let response = serve(&config, &parts(Method::POST, "/test.pdf")).await;
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        let body = body_bytes(response).await;
        assert!(String::from_utf8_lossy(&body).contains("Unsupported method (&#x27;POST&#x27;)"));
    }

    #[tokio::test]
    async fn test_directory_without_slash_redirects() {
        let (_dir, config) = fixture();
        let response = serve(&config, &parts(Method::GET, "/docs?x=1")).await;
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()["location"], "/docs/?x=1");
    }

    #[tokio::test]
    async fn test_directory_listing() {
        let (_dir, config) = fixture();
        let response = serve(&config, &parts(Method::GET, "/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_bytes(response).await;
        let page = String::from_utf8_lossy(&body);
        assert!(page.contains("Directory listing for /"));
        assert!(page.contains("<a href=\"docs/\">docs/</a>"));
        assert!(page.contains("<a href=\"test.pdf\">test.pdf</a>"));
    }

    #[tokio::test]
    async fn test_index_file_preferred_over_listing() {
        let (dir, config) = fixture();
        std::fs::write(dir.path().join("docs").join("index.html"), b"<p>index</p>").unwrap();
        let response = serve(&config, &parts(Method::GET, "/docs/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "text/html");
        assert_eq!(body_bytes(response).await.as_ref(), b"<p>index</p>");
    }

    #[tokio::test]
    async fn test_traversal_cannot_escape_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("secret.txt"), b"secret").unwrap();
        std::fs::create_dir(dir.path().join("public")).unwrap();
        let config = config_for(dir.path().join("public"));

        for uri in ["/../secret.txt", "/%2e%2e/secret.txt", "/a/../../secret.txt"] {
            let response = serve(&config, &parts(Method::GET, uri)).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri} escaped the root");
        }
    }

    #[tokio::test]
    async fn test_range_request() {
        let (_dir, config) = fixture();
        let mut request = parts(Method::GET, "/test.pdf");
        request.headers.insert(RANGE, "bytes=0-3".parse().unwrap());
        let response = serve(&config, &request).await;
        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(
            response.headers()["content-range"],
            format!("bytes 0-3/{}", PDF_BYTES.len()).as_str()
        );
        assert_eq!(body_bytes(response).await.as_ref(), b"%PDF");
    }

    #[tokio::test]
    async fn test_unsatisfiable_range() {
        let (_dir, config) = fixture();
        let mut request = parts(Method::GET, "/test.pdf");
        request.headers.insert(RANGE, "bytes=9999-".parse().unwrap());
        let response = serve(&config, &request).await;
        assert_eq!(response.status(), StatusCode::RANGE_NOT_SATISFIABLE);
    }

    #[tokio::test]
    async fn test_if_modified_since_returns_304() {
        let (_dir, config) = fixture();
        let first = serve(&config, &parts(Method::GET, "/test.pdf")).await;
        let last_modified = first.headers()["last-modified"].clone();

        let mut request = parts(Method::GET, "/test.pdf");
        request.headers.insert(IF_MODIFIED_SINCE, last_modified);
        let response = serve(&config, &request).await;
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
        assert!(body_bytes(response).await.is_empty());
    }
}
