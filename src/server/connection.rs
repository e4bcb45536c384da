// Connection handling module
// Serves a single accepted TCP connection over HTTP/1

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::ServerConfig;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// Errors end only this connection; a client that goes away mid-response is
/// not worth a log line.
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    config: Arc<ServerConfig>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&config), peer_addr)),
        );

        if let Err(err) = conn.await {
            if !err.is_incomplete_message() && !err.is_canceled() {
                logger::log_connection_error(&err);
            }
        }
    });
}
