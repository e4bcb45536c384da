//! Request handler module
//!
//! Independent pieces composed by the router: CORS header injection,
//! preflight short-circuit and static file serving.

pub mod cors;
pub mod listing;
pub mod preflight;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
