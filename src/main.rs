use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use cors_file_server::cli::Cli;
use cors_file_server::config::{self, ServerConfig};
use cors_file_server::logger;
use cors_file_server::server::{self, SignalHandler};

fn main() -> ExitCode {
    // Invalid arguments exit here with a usage message, before any socket is opened
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let root = config::executable_dir()?;
    let cfg = Arc::new(ServerConfig::load(cli.port, root)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async_main(cfg));
    // Connections still open at shutdown are abandoned
    runtime.shutdown_background();
    result
}

async fn async_main(cfg: Arc<ServerConfig>) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr();
    let listener =
        server::create_listener(addr).map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    let signals = Arc::new(SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    logger::log_server_start(cfg.port, &cfg.public_url());

    server::start_server_loop(listener, cfg, Arc::clone(&signals.shutdown)).await;

    logger::log_server_stop();
    Ok(())
}
