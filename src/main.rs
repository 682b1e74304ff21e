//! `aacbook`: web reader and slide-deck viewer for "Arkitektur som kod".

use std::sync::atomic::{AtomicI32, Ordering};

use clap::Parser;
use tokio_util::sync::CancellationToken;

use aacbook::cli::args::Cli;
use aacbook::cli::commands;
use aacbook::error::ExitCode;
use aacbook::observability::init_logging;

/// Exit code of the signal that triggered shutdown, 0 if none did.
static SIGNAL_EXIT: AtomicI32 = AtomicI32::new(ExitCode::SUCCESS);

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    let cancel = CancellationToken::new();
    tokio::spawn(watch_signals(cancel.clone()));

    match commands::dispatch(cli, cancel).await {
        Ok(()) => std::process::exit(SIGNAL_EXIT.load(Ordering::SeqCst)),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// First SIGINT/SIGTERM cancels `cancel` for a graceful shutdown; a
/// second one exits immediately.
async fn watch_signals(cancel: CancellationToken) {
    let mut sigterm =
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(signal) => signal,
            Err(e) => {
                tracing::warn!(error = %e, "failed to register SIGTERM handler");
                if tokio::signal::ctrl_c().await.is_ok() {
                    SIGNAL_EXIT.store(ExitCode::INTERRUPTED, Ordering::SeqCst);
                    cancel.cancel();
                    let _ = tokio::signal::ctrl_c().await;
                    std::process::exit(ExitCode::INTERRUPTED);
                }
                return;
            }
        };

    let code = tokio::select! {
        _ = tokio::signal::ctrl_c() => ExitCode::INTERRUPTED,
        _ = sigterm.recv() => ExitCode::TERMINATED,
    };
    SIGNAL_EXIT.store(code, Ordering::SeqCst);
    eprintln!("\nShutting down gracefully... (press Ctrl+C again to force)");
    cancel.cancel();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => std::process::exit(ExitCode::INTERRUPTED),
        _ = sigterm.recv() => std::process::exit(ExitCode::TERMINATED),
    }
}
