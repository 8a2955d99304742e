//! Shared Module
//!
//! Types shared by the state machine, the service wrapper and the owner:
//! the status notification, the machine configuration and the crate error.

/// Owner notification types
pub mod event;

/// Crate error types
pub mod error;

/// Machine configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{ConfigError, MachineConfig, MachineConfigBuilder};
pub use error::ConnectivityError;
pub use event::{Notification, StatusKind};
