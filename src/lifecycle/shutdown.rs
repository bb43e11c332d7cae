//! Shutdown coordination for the catalog service.
//!
//! Shutdown is a one-way latch: once triggered it stays triggered, so a
//! task that subscribes late (the self-test is spawned after the server)
//! still sees it.

use std::sync::Arc;
use tokio::sync::watch;

/// Owner side of the shutdown latch. Cheap to clone; every clone flips the
/// same latch.
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

/// Waiter side of the shutdown latch, handed to the server and to tasks
/// that should stop with it.
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Flip the latch. Repeated calls are no-ops.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Resolve once shutdown has been triggered, or once every `Shutdown`
    /// handle is gone and nobody is left to trigger it.
    pub async fn recv(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }
}
