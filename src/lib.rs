//! Static file server that adds permissive CORS headers to every response,
//! so a browser page on another origin can fetch local files such as PDFs.

pub mod cli;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
