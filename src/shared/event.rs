/**
 * Owner Notifications
 *
 * This module defines the status notifications the connectivity machine
 * sends upward to its owner. A notification is emitted on every state entry
 * and in answer to a status query. It is fire-and-forget: the machine never
 * stores it and never waits on its delivery.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which status a notification reports
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Host is reported online
    Online,
    /// Host is reported offline (possibly forced)
    Offline,
}

impl StatusKind {
    /// Whether this kind reports an online host
    pub fn is_online(self) -> bool {
        matches!(self, StatusKind::Online)
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Online => f.write_str("online"),
            StatusKind::Offline => f.write_str("offline"),
        }
    }
}

/// Status notification sent to the owning process
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    /// Reported status
    pub kind: StatusKind,
    /// Configured label for `kind` (e.g. `STATUS_ONLINE`)
    pub event: String,
    /// Whether the user override is currently pinning the machine offline
    pub is_forced_offline: bool,
}

impl Notification {
    /// Create a new notification
    pub fn new(kind: StatusKind, event: impl Into<String>, is_forced_offline: bool) -> Self {
        Self {
            kind,
            event: event.into(),
            is_forced_offline,
        }
    }

    /// Create an online notification
    pub fn online(event: impl Into<String>, is_forced_offline: bool) -> Self {
        Self::new(StatusKind::Online, event, is_forced_offline)
    }

    /// Create an offline notification
    pub fn offline(event: impl Into<String>, is_forced_offline: bool) -> Self {
        Self::new(StatusKind::Offline, event, is_forced_offline)
    }

    /// Whether this notification reports an online host
    pub fn is_online(&self) -> bool {
        self.kind.is_online()
    }

    /// Render as a single JSON line
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
