//! Machine configuration module
//!
//! Provides the construction-time configuration of a connectivity machine.
//! The two status labels only change what the owner sees in
//! [`Notification::event`](crate::shared::event::Notification), never how
//! the machine behaves.
//!
//! Configuration can be assembled three ways:
//!
//! - [`MachineConfig::builder`] for programmatic setup
//! - [`MachineConfig::from_env`] to overlay `OFFLINE_*` environment variables
//! - [`MachineConfig::from_toml_str`] / [`MachineConfig::from_file`]

use crate::shared::event::StatusKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default label for online notifications
pub const DEFAULT_STATUS_ONLINE_EVENT: &str = "STATUS_ONLINE";
/// Default label for offline notifications
pub const DEFAULT_STATUS_OFFLINE_EVENT: &str = "STATUS_OFFLINE";
/// Default capacity of the service request channel
pub const DEFAULT_COMMAND_BUFFER: usize = 32;

const ENV_STATUS_ONLINE_EVENT: &str = "OFFLINE_STATUS_ONLINE_EVENT";
const ENV_STATUS_OFFLINE_EVENT: &str = "OFFLINE_STATUS_OFFLINE_EVENT";
const ENV_COMMAND_BUFFER: &str = "OFFLINE_COMMAND_BUFFER";

/// Connectivity machine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Label carried by online notifications
    pub status_online_event: String,
    /// Label carried by offline notifications
    pub status_offline_event: String,
    /// Capacity of the service request channel
    pub command_buffer: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            status_online_event: DEFAULT_STATUS_ONLINE_EVENT.to_string(),
            status_offline_event: DEFAULT_STATUS_OFFLINE_EVENT.to_string(),
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}

impl MachineConfig {
    /// Create a new MachineConfigBuilder
    pub fn builder() -> MachineConfigBuilder {
        MachineConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.status_online_event.trim().is_empty() {
            return Err(ConfigError::EmptyLabel("status_online_event"));
        }
        if self.status_offline_event.trim().is_empty() {
            return Err(ConfigError::EmptyLabel("status_offline_event"));
        }
        if self.command_buffer == 0 {
            return Err(ConfigError::ZeroCommandBuffer);
        }
        Ok(())
    }

    /// Label reported for a given status
    pub fn label_for(&self, kind: StatusKind) -> &str {
        match kind {
            StatusKind::Online => &self.status_online_event,
            StatusKind::Offline => &self.status_offline_event,
        }
    }

    /// Defaults overlaid with `OFFLINE_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(label) = std::env::var(ENV_STATUS_ONLINE_EVENT) {
            builder = builder.status_online_event(label);
        }
        if let Ok(label) = std::env::var(ENV_STATUS_OFFLINE_EVENT) {
            builder = builder.status_offline_event(label);
        }
        if let Ok(raw) = std::env::var(ENV_COMMAND_BUFFER) {
            let buffer = raw.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                key: ENV_COMMAND_BUFFER,
                value: raw.clone(),
            })?;
            builder = builder.command_buffer(buffer);
        }

        builder.build()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: MachineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

/// Builder for MachineConfig
#[derive(Debug, Default)]
pub struct MachineConfigBuilder {
    status_online_event: Option<String>,
    status_offline_event: Option<String>,
    command_buffer: Option<usize>,
}

impl MachineConfigBuilder {
    /// Set the online notification label
    pub fn status_online_event(mut self, label: impl Into<String>) -> Self {
        self.status_online_event = Some(label.into());
        self
    }

    /// Set the offline notification label
    pub fn status_offline_event(mut self, label: impl Into<String>) -> Self {
        self.status_offline_event = Some(label.into());
        self
    }

    /// Set the service request channel capacity
    pub fn command_buffer(mut self, buffer: usize) -> Self {
        self.command_buffer = Some(buffer);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<MachineConfig, ConfigError> {
        let defaults = MachineConfig::default();
        let config = MachineConfig {
            status_online_event: self
                .status_online_event
                .unwrap_or(defaults.status_online_event),
            status_offline_event: self
                .status_offline_event
                .unwrap_or(defaults.status_offline_event),
            command_buffer: self.command_buffer.unwrap_or(defaults.command_buffer),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("label must not be empty: {0}")]
    EmptyLabel(&'static str),
    #[error("command buffer must be at least 1")]
    ZeroCommandBuffer,
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
