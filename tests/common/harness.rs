//! Machine harness
//!
//! Wires a machine to a `NetworkMonitor` and an unbounded notification
//! channel, and pumps probes after every simulated host change.

use offline_machine::host::NetworkMonitor;
use offline_machine::notify::notification_channel;
use offline_machine::{ConnectivityMachine, MachineConfig, Notification, StatusKind};
use tokio::sync::mpsc::UnboundedReceiver;

pub struct Harness {
    pub machine: ConnectivityMachine<NetworkMonitor>,
    pub host: NetworkMonitor,
    notifications: UnboundedReceiver<Notification>,
}

impl Harness {
    /// Machine constructed but not started
    pub fn new(host_online: bool) -> Self {
        Self::with_config(host_online, MachineConfig::default())
    }

    pub fn with_config(host_online: bool, config: MachineConfig) -> Self {
        let host = NetworkMonitor::new(host_online);
        let (tx, notifications) = notification_channel();
        let machine = ConnectivityMachine::new(config, host.clone(), tx);
        Self {
            machine,
            host,
            notifications,
        }
    }

    /// Machine started, with its entry notifications still queued
    pub fn started(host_online: bool) -> Self {
        let mut harness = Self::new(host_online);
        harness.machine.start();
        harness
    }

    /// Flip the host and let the active probe react
    pub fn set_host(&mut self, online: bool) {
        self.host.set_online(online);
        self.machine.poll_probe();
    }

    /// Notifications received since the last call
    pub fn take(&mut self) -> Vec<Notification> {
        std::iter::from_fn(|| self.notifications.try_recv().ok()).collect()
    }

    pub fn kinds(&mut self) -> Vec<StatusKind> {
        self.take().into_iter().map(|n| n.kind).collect()
    }
}
