//! Side effects requested by the transition function

use crate::host::Direction;
use crate::machine::event::Signal;
use crate::shared::StatusKind;

/// State-scoped one-shot listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Probe {
    /// Armed in `Offline`: resyncs at activation, then waits for the host to come online
    Offline,
    /// Armed in `Online`: waits for the host to go offline, no resync
    Online,
}

impl Probe {
    /// Host transition this probe listens for
    pub fn direction(self) -> Direction {
        match self {
            Probe::Offline => Direction::ToOnline,
            Probe::Online => Direction::ToOffline,
        }
    }

    /// Signal raised when the probe fires
    pub fn signal(self) -> Signal {
        match self {
            Probe::Offline => Signal::BecameOnline,
            Probe::Online => Signal::BecameOffline,
        }
    }
}

/// Effect executed by the interpreter, in list order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Cancel the probe of the state being exited
    DisarmProbe,
    /// Send a status notification to the owner
    EmitNotification(StatusKind),
    /// Activate the probe of the state being entered
    ArmProbe(Probe),
}
