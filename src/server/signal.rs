// Signal handling module
//
// Supported signals:
// - SIGINT:  Shutdown (Ctrl+C)
// - SIGTERM: Shutdown

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Signal handler state
pub struct SignalHandler {
    /// Raised once when a shutdown signal arrives
    pub shutdown: Arc<Notify>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Wake the server loop
    pub fn request_shutdown(&self) {
        // notify_one keeps a permit if the loop isn't waiting yet
        self.shutdown.notify_one();
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start signal handlers (Unix)
///
/// Spawns a background task that requests shutdown on SIGINT or SIGTERM.
/// Each signal is registered on its own, so one failing registration
/// doesn't disable the other.
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    // Registered before returning so a signal sent right after startup is caught
    let interrupt = signal(SignalKind::interrupt());
    let terminate = signal(SignalKind::terminate());
    tokio::spawn(async move {
        wait_for_shutdown_signal(interrupt, terminate).await;
        handler.request_shutdown();
    });
}

/// Resolve when either registered signal arrives
#[cfg(unix)]
async fn wait_for_shutdown_signal(
    interrupt: std::io::Result<tokio::signal::unix::Signal>,
    terminate: std::io::Result<tokio::signal::unix::Signal>,
) {
    tokio::select! {
        () = until_received("SIGINT", interrupt) => {}
        () = until_received("SIGTERM", terminate) => {}
    }
}

/// Wait for one delivery of a registered signal; a failed registration is
/// logged and never resolves
#[cfg(unix)]
async fn until_received(name: &str, registered: std::io::Result<tokio::signal::unix::Signal>) {
    match registered {
        Ok(mut signal) => {
            signal.recv().await;
        }
        Err(e) => {
            logger::log_error(&format!("Failed to register {name} handler: {e}"));
            std::future::pending::<()>().await;
        }
    }
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => handler.request_shutdown(),
            Err(e) => logger::log_error(&format!("Failed to listen for Ctrl+C: {e}")),
        }
    });
}
