//! HTTP protocol layer module
//!
//! Protocol helpers used by the request handlers: response builders,
//! content types, byte ranges, modification-time validation and request
//! path translation.

pub mod cache;
pub mod mime;
pub mod path;
pub mod range;
pub mod response;

// Re-export commonly used items
pub use range::{parse_range_header, RangeParseResult};
pub use response::{
    build_304_response, build_404_response, build_416_response, build_501_response,
    build_options_response, build_redirect_response,
};
