//! Command line interface
//!
//! `cors-file-server [PORT]`

use clap::Parser;

/// Serve the program's directory over HTTP with permissive CORS headers
#[derive(Debug, Parser)]
#[command(name = "cors-file-server", version)]
pub struct Cli {
    /// Port to listen on (default: 8080)
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,
}
