//! Crate Error Types
//!
//! The state machine itself cannot fail: every event either matches a
//! guarded transition or is dropped. Errors only arise around it, when
//! loading configuration, talking to a stopped service, or rendering
//! notifications for the wire.
//!
//! # Usage
//!
//! ```rust
//! use offline_machine::shared::error::ConnectivityError;
//!
//! let error = ConnectivityError::ServiceClosed;
//! assert!(error.to_string().contains("not running"));
//! ```
use crate::shared::config::ConfigError;
use thiserror::Error;

/// Errors surfaced by the connectivity crate
#[derive(Debug, Error)]
pub enum ConnectivityError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The service task has stopped and can no longer accept requests
    #[error("Connectivity service is not running")]
    ServiceClosed,

    /// Notification could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
