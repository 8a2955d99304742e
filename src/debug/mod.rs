//! Debug utilities and helpers
//!
//! Invariant checks run after every processed event. Release builds only log
//! a violation; debug builds panic on it.

use crate::machine::Snapshot;

/// Debug mode feature flag
pub const DEBUG_MODE: bool = cfg!(debug_assertions);

/// Validate state invariant
///
/// Logs an error if the condition fails and panics in debug builds.
pub fn validate_invariant(condition: bool, message: &str) {
    if !condition {
        tracing::error!("Invariant violation: {}", message);
        if DEBUG_MODE {
            panic!("Invariant violation: {}", message);
        }
    }
}

/// Check a settled machine: forced offline never coexists with online
pub fn validate_snapshot(snapshot: &Snapshot) {
    validate_invariant(
        snapshot.is_consistent(),
        "machine settled online while forced offline",
    );
}
