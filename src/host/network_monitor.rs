//! # Network Monitor
//!
//! In-memory host environment. Whatever actually observes the network (an OS
//! hook, a UI toolkit callback, a test) flips the monitor with
//! [`NetworkMonitor::set_online`]; the monitor answers connectivity queries
//! and fires the one-shot listeners registered for that direction.
//!
//! ## Usage
//!
//! ```rust
//! use offline_machine::host::{Direction, HostConnectivity, NetworkMonitor};
//!
//! let monitor = NetworkMonitor::new(false);
//! let mut subscription = monitor.on_transition(Direction::ToOnline);
//!
//! assert_eq!(monitor.set_online(true), 1);
//! assert!(subscription.try_fired());
//! ```

use crate::host::{Direction, HostConnectivity, Subscription, Trigger};
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared in-memory host connectivity
#[derive(Debug, Clone, Default)]
pub struct NetworkMonitor {
    inner: Arc<Mutex<MonitorInner>>,
}

#[derive(Debug, Default)]
struct MonitorInner {
    online: bool,
    listeners: Vec<Trigger>,
}

impl NetworkMonitor {
    pub fn new(online: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MonitorInner {
                online,
                listeners: Vec::new(),
            })),
        }
    }

    /// Record the host connectivity.
    ///
    /// Returns how many listeners received the transition. Setting the
    /// current value again is not a transition and fires nothing.
    pub fn set_online(&self, online: bool) -> usize {
        let mut inner = self.lock();
        if inner.online == online {
            tracing::trace!("[CONNECTIVITY] Host already {}, nothing to notify", label(online));
            return 0;
        }
        inner.online = online;

        let direction = Direction::towards(online);
        let (due, waiting): (Vec<Trigger>, Vec<Trigger>) = inner
            .listeners
            .drain(..)
            .partition(|trigger| trigger.direction() == direction);
        inner.listeners = waiting;
        drop(inner);

        let delivered = due.into_iter().map(Trigger::fire).filter(|ok| *ok).count();
        tracing::debug!(
            "[CONNECTIVITY] Host went {}, notified {} listener(s)",
            label(online),
            delivered
        );
        delivered
    }

    pub fn go_online(&self) -> usize {
        self.set_online(true)
    }

    pub fn go_offline(&self) -> usize {
        self.set_online(false)
    }

    /// Listeners still waiting for a transition, after pruning cancelled ones
    pub fn pending_listeners(&self) -> usize {
        let mut inner = self.lock();
        inner.listeners.retain(|trigger| !trigger.is_cancelled());
        inner.listeners.len()
    }

    // A panic while holding the lock cannot leave the flag and the registry
    // out of step, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, MonitorInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HostConnectivity for NetworkMonitor {
    fn is_online(&self) -> bool {
        self.lock().online
    }

    fn on_transition(&self, direction: Direction) -> Subscription {
        let (subscription, trigger) = Subscription::new(direction);
        let mut inner = self.lock();
        inner.listeners.retain(|trigger| !trigger.is_cancelled());
        inner.listeners.push(trigger);
        subscription
    }
}

fn label(online: bool) -> &'static str {
    if online {
        "online"
    } else {
        "offline"
    }
}
