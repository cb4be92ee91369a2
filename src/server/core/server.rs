use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use axum_server::Handle;
use log::{error, info};
use tokio::net::lookup_host;
use tokio::signal;
use tokio::task::JoinError;

use crate::server::app::create_app;
use crate::utils::error::{GenError, Result};

/// How long in-flight requests may run once shutdown starts
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Serve `destination` at `addr` until Ctrl+C or SIGTERM
pub async fn serve(destination: &Path, addr: &str) -> Result<()> {
    serve_with_shutdown(destination, addr, shutdown_signal()).await
}

/// Serve `destination` at `addr` until `shutdown` completes.
///
/// The listener and `shutdown` are awaited together: a listener failure
/// returns its error, a completed `shutdown` starts a graceful shutdown
/// that waits at most [`SHUTDOWN_GRACE`] for open connections. The port
/// is released by the time this returns.
pub async fn serve_with_shutdown<F>(destination: &Path, addr: &str, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let socket = resolve(addr).await?;
    let app = create_app(destination.to_path_buf());

    let handle = Handle::new();
    let server = axum_server::bind(socket)
        .handle(handle.clone())
        .serve(app.into_make_service());
    let mut task = tokio::spawn(server);

    if let Some(local) = handle.listening().await {
        info!("Serving {} at http://{}", destination.display(), local);
    }

    tokio::select! {
        result = &mut task => return finish(result),
        _ = shutdown => {
            info!("Shutting down server...");
            handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        }
    }

    finish(task.await)?;
    info!("Server stopped");
    Ok(())
}

/// Resolve a `host:port` string, accepting host names like `localhost`
pub async fn resolve(addr: &str) -> Result<SocketAddr> {
    let mut addrs = lookup_host(addr).await.map_err(GenError::Server)?;
    addrs.next().ok_or_else(|| {
        GenError::Server(io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            format!("{} did not resolve to any address", addr),
        ))
    })
}

fn finish(result: std::result::Result<io::Result<()>, JoinError>) -> Result<()> {
    match result {
        Ok(outcome) => outcome.map_err(GenError::Server),
        Err(e) => Err(GenError::Server(io::Error::other(e))),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
