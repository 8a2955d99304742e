//! Custom assertion macros and utilities
//!
//! Provides assertion macros with descriptive failure output for machine
//! state and notification sequences.

/// Assert the kinds of every notification received since the last check
macro_rules! assert_kinds {
    ($harness:expr, [$($kind:ident),* $(,)?]) => {
        pretty_assertions::assert_eq!(
            $harness.kinds(),
            vec![$(offline_machine::StatusKind::$kind),*],
            "unexpected notification sequence"
        );
    };
}

/// Assert the settled state and the forced-offline flag
macro_rules! assert_settled {
    ($harness:expr, $state:ident, forced = $forced:expr) => {{
        let snapshot = $harness.machine.snapshot();
        assert_eq!(
            snapshot.state,
            offline_machine::ConnectivityState::$state,
            "Expected machine to settle {:?}, got {:?}",
            offline_machine::ConnectivityState::$state,
            snapshot
        );
        assert_eq!(
            snapshot.context.is_forced_offline,
            $forced,
            "Unexpected forced-offline flag in {:?}",
            snapshot
        );
    }};
}
