//! Offline Machine - Main Library
//!
//! Offline Machine tracks whether the host environment is online or offline
//! and reconciles three independent signals into one status reported to an
//! owning process:
//!
//! - network transition events coming from the host
//! - a user "force offline" override and its undo
//! - on-demand status queries from the owner
//!
//! # Module Structure
//!
//! - **`machine`** - The connectivity state machine
//!   - States, context, events and effects
//!   - Pure transition table
//!   - Run-to-completion interpreter with state-scoped probes
//!
//! - **`host`** - The host environment collaborator
//!   - `HostConnectivity` trait and one-shot subscription tokens
//!   - In-memory `NetworkMonitor` and fixed `StaticHost`
//!
//! - **`notify`** - Owner notification sinks (mpsc, broadcast, callbacks)
//!
//! - **`service`** - Tokio task wrapper with a cloneable command handle
//!
//! - **`shared`** - Notification type, configuration, errors
//!
//! # Usage
//!
//! ```rust
//! use offline_machine::host::NetworkMonitor;
//! use offline_machine::machine::{Command, ConnectivityMachine, ConnectivityState};
//! use offline_machine::notify::notification_channel;
//! use offline_machine::shared::MachineConfig;
//!
//! let host = NetworkMonitor::new(true);
//! let (tx, mut rx) = notification_channel();
//! let mut machine = ConnectivityMachine::new(MachineConfig::default(), host.clone(), tx);
//!
//! // Starts offline, then resyncs against the host
//! machine.start();
//! assert_eq!(machine.state(), ConnectivityState::Online);
//!
//! machine.send(Command::ForceOffline);
//! host.go_offline();
//! host.go_online();
//! machine.poll_probe();
//! assert_eq!(machine.state(), ConnectivityState::Offline);
//!
//! machine.send(Command::UndoForceOffline);
//! assert_eq!(machine.state(), ConnectivityState::Online);
//! # let _ = rx.try_recv();
//! ```
//!
//! # Feature Flags
//!
//! - **`monitor`** - Builds the `offline-monitor` binary with a
//!   `tracing-subscriber` log output
//!
//! # Thread Safety
//!
//! - The machine is `Send` and processes one event at a time; share it by
//!   moving it into a [`service::ConnectivityService`]
//! - `NetworkMonitor` is a cheap `Clone` over shared state
//!
//! # Error Handling
//!
//! The state machine never fails: unmatched events are dropped. Errors only
//! come from configuration loading and talking to a stopped service, see
//! `shared::error`.

/// Connectivity state machine
pub mod machine;

/// Host environment collaborator
pub mod host;

/// Owner notification sinks
pub mod notify;

/// Async service wrapper
pub mod service;

/// Shared types and data structures
pub mod shared;

/// Invariant checks
pub mod debug;

pub use host::{HostConnectivity, NetworkMonitor};
pub use machine::{Command, ConnectivityMachine, ConnectivityState};
pub use service::{ConnectivityHandle, ConnectivityService};
pub use shared::{ConnectivityError, MachineConfig, Notification, StatusKind};
