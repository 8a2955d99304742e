//! # Host Connectivity
//!
//! The host environment is the only source of truth about the network. The
//! machine consumes exactly two capabilities from it:
//!
//! - a synchronous snapshot of current connectivity
//! - one-shot subscriptions to the next transition in a given direction
//!
//! ## Contract
//!
//! Both calls are total and non-blocking. A host that cannot answer must
//! decide on an answer itself (usually "offline"); the machine does not guard
//! against panicking or hanging collaborators.
//!
//! ## Implementations
//!
//! - [`NetworkMonitor`]: in-memory host with a listener registry, flipped by
//!   whatever actually observes the network
//! - [`StaticHost`]: fixed connectivity with no event source

pub mod network_monitor;
pub mod static_host;

pub use network_monitor::NetworkMonitor;
pub use static_host::StaticHost;

use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Direction of a host connectivity transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Host went from offline to online
    ToOnline,
    /// Host went from online to offline
    ToOffline,
}

impl Direction {
    /// Direction that lands on the given connectivity
    pub fn towards(online: bool) -> Self {
        if online {
            Direction::ToOnline
        } else {
            Direction::ToOffline
        }
    }
}

/// Host environment collaborator consumed by the connectivity machine
pub trait HostConnectivity: Send + 'static {
    /// Current connectivity snapshot. Must not block and has no side effects.
    fn is_online(&self) -> bool;

    /// Register a one-shot listener for the next transition in `direction`.
    ///
    /// Registrations are independent of each other. The listener removes
    /// itself after firing; the returned token may also be cancelled.
    fn on_transition(&self, direction: Direction) -> Subscription;
}

impl<T> HostConnectivity for Arc<T>
where
    T: HostConnectivity + Sync,
{
    fn is_online(&self) -> bool {
        (**self).is_online()
    }

    fn on_transition(&self, direction: Direction) -> Subscription {
        (**self).on_transition(direction)
    }
}

/// Consumer side of a one-shot transition listener
#[derive(Debug)]
pub struct Subscription {
    direction: Direction,
    rx: Option<oneshot::Receiver<()>>,
}

/// Host side of a one-shot transition listener
#[derive(Debug)]
pub struct Trigger {
    direction: Direction,
    tx: oneshot::Sender<()>,
}

impl Subscription {
    /// Create a listener token and the trigger the host keeps
    pub fn new(direction: Direction) -> (Self, Trigger) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                direction,
                rx: Some(rx),
            },
            Trigger { direction, tx },
        )
    }

    /// Token that never fires
    pub fn never(direction: Direction) -> Self {
        Self {
            direction,
            rx: None,
        }
    }

    /// Direction this listener waits for
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the listener can still fire
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    /// Non-blocking check; true exactly once, when the trigger has fired
    pub fn try_fired(&mut self) -> bool {
        let Some(rx) = self.rx.as_mut() else {
            return false;
        };

        match rx.try_recv() {
            Ok(()) => {
                self.rx = None;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                self.rx = None;
                false
            }
        }
    }

    /// Wait for the trigger to fire.
    ///
    /// Cancel-safe. If the host drops the trigger without firing, this stays
    /// pending forever.
    pub async fn fired(&mut self) {
        if let Some(rx) = self.rx.as_mut() {
            let delivered = rx.await.is_ok();
            self.rx = None;
            if delivered {
                return;
            }
        }
        std::future::pending::<()>().await
    }

    /// Cancel the listener so the host can prune it
    pub fn cancel(mut self) {
        if let Some(mut rx) = self.rx.take() {
            rx.close();
        }
    }
}

impl Trigger {
    /// Direction the listener waits for
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the consumer cancelled or dropped its token
    pub fn is_cancelled(&self) -> bool {
        self.tx.is_closed()
    }

    /// Deliver the transition; false if nobody was listening anymore
    pub fn fire(self) -> bool {
        self.tx.send(()).is_ok()
    }
}
