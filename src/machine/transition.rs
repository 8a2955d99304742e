//! Pure transition function
//!
//! All decision logic lives here. Given the settled state, its context, an
//! event and a snapshot of host connectivity, [`transition`] returns the
//! next state and context plus the ordered effects the interpreter must run.
//! Nothing here touches a host, a channel or a clock.
//!
//! Every targeted transition is a re-entry, including `Offline -> Offline`:
//! the old probe is disarmed, the entry notification is emitted, and a fresh
//! probe is armed, always in that order.

use crate::machine::effect::Effect;
use crate::machine::event::Event;
use crate::machine::state::{ConnectivityContext, ConnectivityState};

/// Outcome of feeding one event to the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ConnectivityState,
    pub context: ConnectivityContext,
    pub effects: Vec<Effect>,
    /// False when no table row matched and the event was dropped
    pub handled: bool,
}

impl Transition {
    fn enter(state: ConnectivityState, context: ConnectivityContext) -> Self {
        let mut effects = vec![Effect::DisarmProbe];
        effects.extend(entry_effects(state));
        Self {
            state,
            context,
            effects,
            handled: true,
        }
    }

    fn ignored(state: ConnectivityState, context: ConnectivityContext) -> Self {
        Self {
            state,
            context,
            effects: Vec::new(),
            handled: false,
        }
    }
}

/// Entry actions of a state: notify first, then arm its probe
pub fn entry_effects(state: ConnectivityState) -> Vec<Effect> {
    vec![
        Effect::EmitNotification(state.status_kind()),
        Effect::ArmProbe(state.probe()),
    ]
}

/// Resolve one event against the transition table
pub fn transition(
    state: ConnectivityState,
    context: ConnectivityContext,
    event: Event,
    host_online: bool,
) -> Transition {
    use ConnectivityState::{Offline, Online};

    match (state, event) {
        (_, Event::ForceOffline) => Transition::enter(Offline, ConnectivityContext::forced()),

        (_, Event::StatusQuery) => Transition {
            state,
            context,
            effects: vec![Effect::EmitNotification(state.status_kind())],
            handled: true,
        },

        (Offline, Event::BecameOnline) if !context.is_forced_offline => {
            Transition::enter(Online, context)
        }

        (Offline, Event::UndoForceOffline) if context.is_forced_offline => {
            let cleared = ConnectivityContext::default();
            if host_online {
                Transition::enter(Online, cleared)
            } else {
                Transition::enter(Offline, cleared)
            }
        }

        (Online, Event::BecameOffline) => Transition::enter(Offline, context),

        _ => Transition::ignored(state, context),
    }
}
