//! Process signals that stop the HTTP server

use std::future;

use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Cancel `cancel` on the first Ctrl+C or SIGTERM.
///
/// The SIGTERM handler is registered before this returns, so a signal
/// delivered while the listener is still binding is not lost. If `cancel`
/// is cancelled elsewhere the listener task simply exits.
pub fn cancel_on_shutdown(cancel: CancellationToken) {
    let sigterm = Sigterm::register();

    tokio::spawn(async move {
        let source = tokio::select! {
            () = cancel.cancelled() => return,
            () = ctrl_c() => "Ctrl+C",
            () = sigterm.recv() => "SIGTERM",
        };
        tracing::info!("Received {source}, initiating graceful shutdown");
        cancel.cancel();
    });
}

/// Resolves on Ctrl+C; never resolves if the handler cannot be installed.
async fn ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Ctrl+C handler failed; only SIGTERM will stop the server");
        future::pending::<()>().await;
    }
}

#[cfg(unix)]
struct Sigterm(Option<signal::unix::Signal>);

#[cfg(unix)]
impl Sigterm {
    fn register() -> Self {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(handler) => Self(Some(handler)),
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable; only Ctrl+C will stop the server");
                Self(None)
            }
        }
    }

    async fn recv(self) {
        match self.0 {
            Some(mut handler) => {
                handler.recv().await;
            }
            None => future::pending::<()>().await,
        }
    }
}

#[cfg(not(unix))]
struct Sigterm;

#[cfg(not(unix))]
impl Sigterm {
    fn register() -> Self {
        Self
    }

    async fn recv(self) {
        future::pending::<()>().await;
    }
}

#[cfg(all(test, unix))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::time::Duration;

    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    use super::*;

    #[tokio::test]
    async fn sigterm_cancels_the_token() {
        let cancel = CancellationToken::new();
        cancel_on_shutdown(cancel.clone());

        let pid = Pid::from_raw(i32::try_from(std::process::id()).unwrap());
        kill(pid, Signal::SIGTERM).unwrap();

        tokio::time::timeout(Duration::from_secs(5), cancel.cancelled())
            .await
            .unwrap();
    }
}
