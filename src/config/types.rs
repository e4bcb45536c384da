// Configuration types module
// Defines the immutable server configuration and its deserialized settings

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Server configuration, fixed at startup and shared read-only with every connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address (all interfaces by default)
    pub host: IpAddr,
    /// Listen port
    pub port: u16,
    /// Directory that request paths are resolved against
    pub root: PathBuf,
}

impl ServerConfig {
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// URL printed in the startup banner
    pub fn public_url(&self) -> String {
        format!("http://localhost:{}/", self.port)
    }
}

/// Layered settings as produced by the `config` builder
#[derive(Debug, Deserialize)]
pub(super) struct Settings {
    pub server: ListenSettings,
}

#[derive(Debug, Deserialize)]
pub(super) struct ListenSettings {
    pub host: IpAddr,
    pub port: u16,
}
