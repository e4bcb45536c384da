// Configuration module entry point
// Builds the server configuration from built-in defaults and the CLI port

mod types;

use std::io;
use std::path::PathBuf;

pub use types::ServerConfig;
use types::Settings;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

impl ServerConfig {
    /// Build the configuration for the given root directory.
    ///
    /// The port comes from `port_override` when the CLI supplied one, otherwise
    /// from the default. No file or environment source is consulted.
    pub fn load(port_override: Option<u16>, root: PathBuf) -> Result<Self, config::ConfigError> {
        let settings: Settings = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_override_option("server.port", port_override.map(i64::from))?
            .build()?
            .try_deserialize()?;

        Ok(Self {
            host: settings.server.host,
            port: settings.server.port,
            root,
        })
    }
}

/// Directory containing the running executable, used as the served root
/// so lookups don't depend on where the program was started from.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?.canonicalize()?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable has no parent directory: {}", exe.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_default_port_and_host() {
        let cfg = ServerConfig::load(None, PathBuf::from("/srv")).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(cfg.root, PathBuf::from("/srv"));
    }

    #[test]
    fn test_port_override() {
        let cfg = ServerConfig::load(Some(9090), PathBuf::from("/srv")).unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:9090");
        assert_eq!(cfg.public_url(), "http://localhost:9090/");
    }

    #[test]
    fn test_executable_dir_is_directory() {
        let dir = executable_dir().unwrap();
        assert!(dir.is_dir());
        assert!(dir.is_absolute());
    }
}
