//! MIME type detection module
//!
//! Maps a file extension to the Content-Type sent with it.

use std::path::Path;

/// Fallback for unknown or missing extensions
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Get the Content-Type for a file path, matching the extension case-insensitively
///
/// # Examples
/// ```
/// use std::path::Path;
/// use cors_file_server::http::mime::content_type_for;
/// assert_eq!(content_type_for(Path::new("paper.PDF")), "application/pdf");
/// assert_eq!(content_type_for(Path::new("Makefile")), "application/octet-stream");
/// ```
pub fn content_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return DEFAULT_CONTENT_TYPE;
    };
    match ext.to_ascii_lowercase().as_str() {
        // Documents
        "pdf" => "application/pdf",
        "ps" => "application/postscript",
        "epub" => "application/epub+zip",
        "zip" => "application/zip",
        "gz" => "application/gzip",

        // Pages and scripts that load them
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "json" | "map" => "application/json",
        "wasm" => "application/wasm",
        "xml" => "text/xml",

        // Plain text
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/vnd.microsoft.icon",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",

        // Fonts embedded by viewers
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // pdf.js character maps
        "bcmap" => "application/octet-stream",

        _ => DEFAULT_CONTENT_TYPE,
    }
}
