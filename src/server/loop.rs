// Server loop module
// Accepts connections until shutdown is requested

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::handle_connection;
use crate::config::ServerConfig;
use crate::logger;

/// Accept connections on `listener` until `shutdown` is notified.
///
/// Connections already being served are left running; the listener is closed
/// when this returns.
pub async fn start_server_loop(
    listener: TcpListener,
    config: Arc<ServerConfig>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(stream, peer_addr, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::create_listener;
    use std::path::PathBuf;
    use std::time::Duration;

    #[tokio::test]
    async fn test_loop_stops_on_shutdown() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let config = Arc::new(ServerConfig {
            host: addr.ip(),
            port: addr.port(),
            root: PathBuf::from("."),
        });
        let shutdown = Arc::new(Notify::new());

        // Permit is stored, so notifying before the loop polls still stops it
        shutdown.notify_one();
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            start_server_loop(listener, config, Arc::clone(&shutdown)),
        )
        .await;
        assert!(result.is_ok(), "server loop did not stop");

        // Listener was dropped with the loop, so the port can be bound again
        assert!(create_listener(addr).is_ok());
    }
}
