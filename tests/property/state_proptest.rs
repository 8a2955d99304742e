//! Property-based tests for the connectivity machine
//!
//! Random interleavings of host changes and owner commands, checked at
//! every settled point.

use crate::common::Harness;
use offline_machine::{Command, HostConnectivity, Notification};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    HostOnline,
    HostOffline,
    Force,
    Undo,
    Status,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::HostOnline),
        Just(Step::HostOffline),
        Just(Step::Force),
        Just(Step::Undo),
        Just(Step::Status),
    ]
}

fn apply(harness: &mut Harness, step: Step) {
    match step {
        Step::HostOnline => harness.set_host(true),
        Step::HostOffline => harness.set_host(false),
        Step::Force => harness.machine.send(Command::ForceOffline),
        Step::Undo => harness.machine.send(Command::UndoForceOffline),
        Step::Status => harness.machine.send(Command::StatusQuery),
    }
}

proptest! {
    #[test]
    fn test_forced_offline_never_settles_online(
        host_online in any::<bool>(),
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let mut harness = Harness::started(host_online);
        for step in steps {
            apply(&mut harness, step);
            let snapshot = harness.machine.snapshot();
            prop_assert!(!(snapshot.context.is_forced_offline && snapshot.state.is_online()));
        }
    }

    #[test]
    fn test_free_machine_tracks_host(
        host_online in any::<bool>(),
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let mut harness = Harness::started(host_online);
        for step in steps {
            apply(&mut harness, step);
            let snapshot = harness.machine.snapshot();
            if !snapshot.context.is_forced_offline {
                prop_assert_eq!(snapshot.state.is_online(), harness.host.is_online());
            }
        }
    }

    #[test]
    fn test_status_query_has_no_side_effects(
        host_online in any::<bool>(),
        steps in prop::collection::vec(step(), 0..20),
        repeats in 1usize..5,
    ) {
        let mut harness = Harness::started(host_online);
        for step in steps {
            apply(&mut harness, step);
        }
        harness.take();
        let before = harness.machine.snapshot();

        for _ in 0..repeats {
            harness.machine.send(Command::StatusQuery);
        }

        prop_assert_eq!(harness.machine.snapshot(), before);
        let expected = Notification::new(
            before.state.status_kind(),
            harness.machine.config().label_for(before.state.status_kind()),
            before.context.is_forced_offline,
        );
        prop_assert_eq!(harness.take(), vec![expected; repeats]);
    }

    #[test]
    fn test_force_offline_emits_exactly_one_notification(
        host_online in any::<bool>(),
        steps in prop::collection::vec(step(), 0..20),
    ) {
        let mut harness = Harness::started(host_online);
        for step in steps {
            apply(&mut harness, step);
        }
        harness.take();

        harness.machine.send(Command::ForceOffline);
        prop_assert_eq!(
            harness.take(),
            vec![Notification::offline("STATUS_OFFLINE", true)]
        );
    }
}
