//! # Machine Interpreter
//!
//! Runs the pure transition table against a real host and owner. The
//! interpreter owns the settled state, the active probe and a FIFO of
//! pending events, and guarantees run-to-completion: an event, its effects
//! and every event they raise are processed before `send` returns.
//!
//! ## Probes
//!
//! A probe is armed on every state entry, after the entry notification has
//! been handed to the notifier. Each probe registers a one-shot listener with
//! the host. The offline probe then resyncs: if not forced offline and the
//! host is already online, it drops the listener and raises `BecameOnline`
//! straight away. Leaving a state cancels its listener explicitly.
//!
//! Fired probes are picked up either by [`ConnectivityMachine::poll_probe`]
//! (non-blocking) or [`ConnectivityMachine::probe_signal`] (async, used by
//! the service loop).

use crate::debug;
use crate::host::{HostConnectivity, Subscription};
use crate::machine::effect::{Effect, Probe};
use crate::machine::event::{Event, Signal};
use crate::machine::state::{ConnectivityContext, ConnectivityState, Snapshot};
use crate::machine::transition::{entry_effects, transition};
use crate::notify::Notifier;
use crate::shared::{MachineConfig, Notification};
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

/// Connectivity state machine bound to a host and an owner
pub struct ConnectivityMachine<H: HostConnectivity> {
    /// Instance id for log correlation
    id: Uuid,
    config: MachineConfig,
    host: H,
    notifier: Box<dyn Notifier>,
    state: ConnectivityState,
    context: ConnectivityContext,
    /// Probe of the current state, if it has not fired yet
    probe: Option<ActiveProbe>,
    /// Events raised while another event is being processed
    queue: VecDeque<Event>,
    started: bool,
}

struct ActiveProbe {
    probe: Probe,
    subscription: Subscription,
}

impl<H: HostConnectivity> ConnectivityMachine<H> {
    /// Create a machine in `Offline`. Nothing is emitted until [`start`](Self::start).
    pub fn new(config: MachineConfig, host: H, notifier: impl Notifier) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            host,
            notifier: Box::new(notifier),
            state: ConnectivityState::default(),
            context: ConnectivityContext::default(),
            probe: None,
            queue: VecDeque::new(),
            started: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn state(&self) -> ConnectivityState {
        self.state
    }

    pub fn context(&self) -> ConnectivityContext {
        self.context
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            context: self.context,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Probe currently waiting on the host
    pub fn armed_probe(&self) -> Option<Probe> {
        self.probe.as_ref().map(|active| active.probe)
    }

    /// Run the initial `Offline` entry actions. Calling it again does nothing.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        tracing::info!("[CONNECTIVITY] Machine {} starting {}", self.id, self.state);

        for effect in entry_effects(self.state) {
            self.execute(effect);
        }
        debug::validate_snapshot(&self.snapshot());
        self.drain();
    }

    /// Process an event to completion, starting the machine first if needed
    pub fn send(&mut self, event: impl Into<Event>) {
        self.start();
        self.queue.push_back(event.into());
        self.drain();
    }

    /// Process the active probe's signal if it has fired
    pub fn poll_probe(&mut self) -> bool {
        let fired = match self.probe.as_mut() {
            Some(active) => active.subscription.try_fired(),
            None => false,
        };
        if !fired {
            return false;
        }

        if let Some(active) = self.probe.take() {
            tracing::debug!("[CONNECTIVITY] {:?} probe fired", active.probe);
            self.send(active.probe.signal());
        }
        true
    }

    /// Wait for the active probe to fire and return its signal.
    ///
    /// The probe is consumed but the signal is not processed; pass it to
    /// [`send`](Self::send). Cancel-safe. Pending forever when no probe is
    /// armed.
    pub async fn probe_signal(&mut self) -> Signal {
        let Some(active) = self.probe.as_mut() else {
            return std::future::pending().await;
        };

        active.subscription.fired().await;
        let probe = active.probe;
        self.probe = None;
        tracing::debug!("[CONNECTIVITY] {:?} probe fired", probe);
        probe.signal()
    }

    fn drain(&mut self) {
        while let Some(event) = self.queue.pop_front() {
            self.step(event);
        }
    }

    fn step(&mut self, event: Event) {
        let host_online = self.host.is_online();
        let outcome = transition(self.state, self.context, event, host_online);

        if !outcome.handled {
            tracing::debug!(
                "[CONNECTIVITY] Ignoring {:?} while {} (forced offline: {})",
                event,
                self.state,
                self.context.is_forced_offline
            );
            return;
        }

        if event != Event::StatusQuery {
            tracing::info!(
                "[CONNECTIVITY] {} -> {} on {:?} (forced offline: {})",
                self.state,
                outcome.state,
                event,
                outcome.context.is_forced_offline
            );
        }

        self.state = outcome.state;
        self.context = outcome.context;
        for effect in outcome.effects {
            self.execute(effect);
        }
        debug::validate_snapshot(&self.snapshot());
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::DisarmProbe => {
                if let Some(active) = self.probe.take() {
                    tracing::trace!("[CONNECTIVITY] Disarming {:?} probe", active.probe);
                    active.subscription.cancel();
                }
            }
            Effect::EmitNotification(kind) => {
                let notification = Notification::new(
                    kind,
                    self.config.label_for(kind),
                    self.context.is_forced_offline,
                );
                tracing::trace!("[CONNECTIVITY] Notifying owner: {:?}", notification);
                self.notifier.notify(notification);
            }
            Effect::ArmProbe(probe) => self.arm(probe),
        }
    }

    fn arm(&mut self, probe: Probe) {
        // Subscribe before the resync check so a flip in between still lands
        let subscription = self.host.on_transition(probe.direction());

        if probe == Probe::Offline && !self.context.is_forced_offline && self.host.is_online() {
            tracing::debug!("[CONNECTIVITY] Host already online, resyncing");
            subscription.cancel();
            if let Some(stale) = self.probe.take() {
                stale.subscription.cancel();
            }
            self.queue.push_back(probe.signal().into());
            return;
        }

        tracing::debug!(
            "[CONNECTIVITY] Armed {:?} probe, waiting for {:?}",
            probe,
            probe.direction()
        );
        if let Some(stale) = self.probe.replace(ActiveProbe {
            probe,
            subscription,
        }) {
            stale.subscription.cancel();
        }
    }
}

impl<H: HostConnectivity> fmt::Debug for ConnectivityMachine<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectivityMachine")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("context", &self.context)
            .field("probe", &self.armed_probe())
            .field("started", &self.started)
            .finish()
    }
}
