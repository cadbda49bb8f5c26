//! Graceful shutdown

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io,
};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Signal that ended the serve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    CtrlC,
    Terminate,
}

impl Display for ShutdownSignal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::CtrlC => "ctrl_c",
            Self::Terminate => "terminate",
        })
    }
}

/// Wait for Ctrl+C or SIGTERM, then let in-flight requests finish.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    info!(%signal, "shutdown signal received, draining connections");

    handle.stop_graceful(None);

    Ok(())
}

async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .map(|()| ShutdownSignal::CtrlC)
            .map_err(ShutdownSignalError::CtrlC)
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;

        Ok(ShutdownSignal::Terminate)
    };

    // Ctrl+C is the only portable signal.
    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<ShutdownSignal, ShutdownSignalError>>();

    tokio::select! {
        signal = ctrl_c => signal,
        signal = terminate => signal,
    }
}
