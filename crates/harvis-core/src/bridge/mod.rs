//! One-shot host / embedded-report handshake.
//!
//! The host creates the channel before publishing the patched document,
//! hands the [`ReadySignal`] to the render surface, and awaits the
//! [`Handshake`]. The injected bridge expression fires the signal during
//! the report's own initialization; a discarded document simply never
//! fires, and the handshake is abandoned without any cleanup to run.

mod controller;

pub use controller::ReportController;

use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::oneshot;

use crate::filename::FilenameResolver;
use crate::frequency::FrequencyIndex;

/// Fire side of the handshake. `notify` consumes the underlying sender on
/// first use; duplicate ready signals are ignored.
#[derive(Debug)]
pub struct ReadySignal {
    tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl ReadySignal {
    /// Announces that the embedded report finished initializing. Only the
    /// first call has any effect.
    pub fn notify(&self) {
        if let Some(tx) = self.tx.lock().unwrap().take() {
            let _ = tx.send(());
        }
    }
}

/// Await side of the handshake: Pending until the signal fires.
#[derive(Debug)]
pub struct Handshake {
    rx: oneshot::Receiver<()>,
}

impl Handshake {
    /// Waits for the ready signal. `None` means the signal handle was
    /// dropped without firing (document discarded before readiness).
    pub async fn wait(self) -> Option<()> {
        self.rx.await.ok()
    }
}

/// Creates the signal/handshake pair for one published document.
pub fn channel() -> (ReadySignal, Handshake) {
    let (tx, rx) = oneshot::channel();
    (
        ReadySignal {
            tx: Mutex::new(Some(tx)),
        },
        Handshake { rx },
    )
}

/// Terminal states of a driven handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeOutcome {
    /// Signal received; the four selection mutations were issued.
    Completed,
    /// The document was discarded before announcing readiness.
    Abandoned,
}

/// Runs the Ready transition: waits for the signal, gives the report
/// `settle` to finish its own synchronous setup beyond the injected hook,
/// then issues the four state mutations in order.
///
/// There is no timeout; an unfired signal keeps the caller Pending until
/// the fire side is dropped.
pub async fn drive(
    handshake: Handshake,
    settle: Duration,
    controller: &mut dyn ReportController,
    freq: &FrequencyIndex,
    resolver: &mut FilenameResolver,
) -> HandshakeOutcome {
    if handshake.wait().await.is_none() {
        return HandshakeOutcome::Abandoned;
    }
    tokio::time::sleep(settle).await;

    controller.set_pinned(true);
    controller.show_context_menu(true);
    controller.apply_pin_state(true);

    let matched: Vec<String> = controller
        .chunk_labels()
        .into_iter()
        .filter(|label| freq.is_match(&resolver.resolve(label)))
        .collect();
    controller.select_chunks(matched);

    HandshakeOutcome::Completed
}
