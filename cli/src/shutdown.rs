//! Termination signal watcher.

use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Cancels `token` on the first SIGINT or SIGTERM.
pub fn spawn_watcher(token: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = wait_for_signal() => {
                debug!("interrupt received, cancelling stream");
                token.cancel();
            }
            _ = token.cancelled() => {}
        }
    })
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => debug!("received SIGINT"),
        _ = terminate => debug!("received SIGTERM"),
    }
}
