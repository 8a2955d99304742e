//! Events accepted by the connectivity machine
//!
//! Probes raise [`Signal`]s; the owner sends [`Command`]s. Both funnel into
//! [`Event`], the single input of the transition function.

use serde::{Deserialize, Serialize};

/// Everything the transition function can be fed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    BecameOnline,
    BecameOffline,
    ForceOffline,
    UndoForceOffline,
    StatusQuery,
}

/// Internal signal raised by a probe, at most once per probe instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    BecameOnline,
    BecameOffline,
}

/// Externally injected command, handled in any state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Pin the machine offline regardless of the host
    ForceOffline,
    /// Lift the override and re-evaluate against the host
    UndoForceOffline,
    /// Ask for the current status to be re-emitted
    StatusQuery,
}

impl From<Signal> for Event {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::BecameOnline => Event::BecameOnline,
            Signal::BecameOffline => Event::BecameOffline,
        }
    }
}

impl From<Command> for Event {
    fn from(command: Command) -> Self {
        match command {
            Command::ForceOffline => Event::ForceOffline,
            Command::UndoForceOffline => Event::UndoForceOffline,
            Command::StatusQuery => Event::StatusQuery,
        }
    }
}
