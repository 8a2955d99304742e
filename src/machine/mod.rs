//! # Connectivity State Machine
//!
//! Two flat states, `Offline` (initial) and `Online`, one context flag
//! (`is_forced_offline`), and a notification to the owner on every state
//! entry. The decision logic is a pure function; the interpreter applies its
//! effects against a host and an owner.
//!
//! ## Module Structure
//!
//! - `state.rs`: states, context and settled snapshots
//! - `event.rs`: probe signals, owner commands and the unified event
//! - `effect.rs`: probes and the effects the table can request
//! - `transition.rs`: the transition table as a pure function
//! - `interpreter.rs`: run-to-completion execution, probe lifecycle
//!
//! ## Usage
//!
//! ```rust
//! use offline_machine::host::NetworkMonitor;
//! use offline_machine::machine::{Command, ConnectivityMachine, ConnectivityState};
//! use offline_machine::notify::notification_channel;
//! use offline_machine::shared::MachineConfig;
//!
//! let host = NetworkMonitor::new(false);
//! let (tx, mut rx) = notification_channel();
//! let mut machine = ConnectivityMachine::new(MachineConfig::default(), host.clone(), tx);
//!
//! machine.start();
//! assert_eq!(machine.state(), ConnectivityState::Offline);
//!
//! host.go_online();
//! assert!(machine.poll_probe());
//! assert_eq!(machine.state(), ConnectivityState::Online);
//!
//! machine.send(Command::ForceOffline);
//! assert!(machine.context().is_forced_offline);
//!
//! let last = std::iter::from_fn(|| rx.try_recv().ok()).last().unwrap();
//! assert_eq!(last.event, "STATUS_OFFLINE");
//! assert!(last.is_forced_offline);
//! ```

pub mod effect;
pub mod event;
pub mod interpreter;
pub mod state;
pub mod transition;

pub use effect::{Effect, Probe};
pub use event::{Command, Event, Signal};
pub use interpreter::ConnectivityMachine;
pub use state::{ConnectivityContext, ConnectivityState, Snapshot};
pub use transition::{entry_effects, transition, Transition};
