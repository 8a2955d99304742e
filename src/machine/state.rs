//! Machine state and persistent context

use crate::machine::effect::Probe;
use crate::shared::StatusKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level connectivity state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityState {
    #[default]
    Offline,
    Online,
}

impl ConnectivityState {
    pub fn is_online(self) -> bool {
        matches!(self, ConnectivityState::Online)
    }

    /// Status reported to the owner while in this state
    pub fn status_kind(self) -> StatusKind {
        match self {
            ConnectivityState::Offline => StatusKind::Offline,
            ConnectivityState::Online => StatusKind::Online,
        }
    }

    /// Probe armed on entering this state
    pub fn probe(self) -> Probe {
        match self {
            ConnectivityState::Offline => Probe::Offline,
            ConnectivityState::Online => Probe::Online,
        }
    }
}

impl fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityState::Offline => f.write_str("offline"),
            ConnectivityState::Online => f.write_str("online"),
        }
    }
}

/// Context carried across transitions for the lifetime of the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectivityContext {
    /// User override pinning the machine offline
    pub is_forced_offline: bool,
}

impl ConnectivityContext {
    pub fn forced() -> Self {
        Self {
            is_forced_offline: true,
        }
    }
}

/// Settled view of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: ConnectivityState,
    pub context: ConnectivityContext,
}

impl Snapshot {
    /// Forced offline implies offline
    pub fn is_consistent(&self) -> bool {
        !(self.context.is_forced_offline && self.state.is_online())
    }
}
