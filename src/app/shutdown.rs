//! Interrupt handling and graceful shutdown.

use log::warn;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Trips `cancel` on the first Ctrl-C.
///
/// The listener exits without cancelling when `cancel` is tripped by someone
/// else, so [`shutdown_gracefully`] can always join it.
pub fn spawn_interrupt_listener(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => match result {
                Ok(()) => {
                    warn!("Interrupt received, stopping after the queries already completed");
                    cancel.cancel();
                }
                Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
            },
            _ = cancel.cancelled() => {}
        }
    })
}

/// Stops the interrupt listener and waits for it to finish.
pub async fn shutdown_gracefully(listener_cancel: CancellationToken, listener: JoinHandle<()>) {
    listener_cancel.cancel();
    let _ = listener.await;
}
