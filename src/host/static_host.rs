//! Host with fixed connectivity and no transition source.
//!
//! Useful for headless embeddings where nothing can report network changes:
//! the machine still resyncs once on entering offline, and its probes simply
//! never fire.

use crate::host::{Direction, HostConnectivity, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticHost {
    online: bool,
}

impl StaticHost {
    pub fn online() -> Self {
        Self { online: true }
    }

    pub fn offline() -> Self {
        Self { online: false }
    }
}

impl HostConnectivity for StaticHost {
    fn is_online(&self) -> bool {
        self.online
    }

    fn on_transition(&self, direction: Direction) -> Subscription {
        Subscription::never(direction)
    }
}
