//! # Connectivity Service
//!
//! Runs a [`ConnectivityMachine`] inside a tokio task so that probe signals
//! and owner commands are serialized through one loop. The loop `select!`s
//! between the request channel and the active probe; whichever is ready is
//! processed to completion before the next one is looked at.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use offline_machine::host::NetworkMonitor;
//! use offline_machine::machine::ConnectivityMachine;
//! use offline_machine::notify::notification_channel;
//! use offline_machine::service::ConnectivityService;
//! use offline_machine::shared::MachineConfig;
//!
//! # async fn example() -> Result<(), offline_machine::shared::ConnectivityError> {
//! let host = NetworkMonitor::new(false);
//! let (tx, mut notifications) = notification_channel();
//! let machine = ConnectivityMachine::new(MachineConfig::default(), host.clone(), tx);
//!
//! let mut service = ConnectivityService::start(machine);
//! service.force_offline().await?;
//!
//! while let Some(notification) = notifications.recv().await {
//!     println!("{:?}", notification);
//! }
//!
//! let last = service.stop().await?;
//! println!("stopped in {}", last.state);
//! # Ok(())
//! # }
//! ```

use crate::host::HostConnectivity;
use crate::machine::{Command, ConnectivityMachine, Snapshot};
use crate::shared::ConnectivityError;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Requests accepted by the service loop
#[derive(Debug)]
enum Request {
    Command(Command),
    Snapshot(oneshot::Sender<Snapshot>),
    Shutdown,
}

/// Cloneable producer for a running service
#[derive(Debug, Clone)]
pub struct ConnectivityHandle {
    tx: mpsc::Sender<Request>,
}

impl ConnectivityHandle {
    /// Queue a command for the machine
    pub async fn send(&self, command: Command) -> Result<(), ConnectivityError> {
        self.tx
            .send(Request::Command(command))
            .await
            .map_err(|_| ConnectivityError::ServiceClosed)
    }

    pub async fn force_offline(&self) -> Result<(), ConnectivityError> {
        self.send(Command::ForceOffline).await
    }

    pub async fn undo_force_offline(&self) -> Result<(), ConnectivityError> {
        self.send(Command::UndoForceOffline).await
    }

    /// Ask the machine to re-emit its current status
    pub async fn request_status(&self) -> Result<(), ConnectivityError> {
        self.send(Command::StatusQuery).await
    }

    /// Settled state after every earlier request has been processed
    pub async fn snapshot(&self) -> Result<Snapshot, ConnectivityError> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(Request::Snapshot(reply))
            .await
            .map_err(|_| ConnectivityError::ServiceClosed)?;
        response.await.map_err(|_| ConnectivityError::ServiceClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Background task owning a connectivity machine
#[derive(Debug)]
pub struct ConnectivityService {
    /// Id of the machine driven by this service
    machine_id: Uuid,
    handle: ConnectivityHandle,
    task: Option<JoinHandle<Snapshot>>,
}

impl ConnectivityService {
    /// Start the machine and spawn its loop on the current runtime
    pub fn start<H: HostConnectivity>(machine: ConnectivityMachine<H>) -> Self {
        let (tx, rx) = mpsc::channel(machine.config().command_buffer);
        let machine_id = machine.id();
        let task = tokio::spawn(run(machine, rx));

        Self {
            machine_id,
            handle: ConnectivityHandle { tx },
            task: Some(task),
        }
    }

    pub fn machine_id(&self) -> Uuid {
        self.machine_id
    }

    /// Producer handle that can outlive borrows of the service
    pub fn handle(&self) -> ConnectivityHandle {
        self.handle.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub async fn force_offline(&self) -> Result<(), ConnectivityError> {
        self.handle.force_offline().await
    }

    pub async fn undo_force_offline(&self) -> Result<(), ConnectivityError> {
        self.handle.undo_force_offline().await
    }

    pub async fn request_status(&self) -> Result<(), ConnectivityError> {
        self.handle.request_status().await
    }

    pub async fn snapshot(&self) -> Result<Snapshot, ConnectivityError> {
        self.handle.snapshot().await
    }

    /// Stop the loop after pending requests and return the final snapshot
    pub async fn stop(&mut self) -> Result<Snapshot, ConnectivityError> {
        let Some(task) = self.task.take() else {
            return Err(ConnectivityError::ServiceClosed);
        };

        // A closed channel means the loop is already on its way out
        let _ = self.handle.tx.send(Request::Shutdown).await;

        task.await.map_err(|e| {
            tracing::error!("[CONNECTIVITY] Service task for {} failed: {}", self.machine_id, e);
            ConnectivityError::ServiceClosed
        })
    }
}

impl Drop for ConnectivityService {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run<H: HostConnectivity>(
    mut machine: ConnectivityMachine<H>,
    mut requests: mpsc::Receiver<Request>,
) -> Snapshot {
    machine.start();

    loop {
        tokio::select! {
            request = requests.recv() => match request {
                Some(Request::Command(command)) => machine.send(command),
                Some(Request::Snapshot(reply)) => {
                    let _ = reply.send(machine.snapshot());
                }
                Some(Request::Shutdown) | None => break,
            },
            signal = machine.probe_signal() => machine.send(signal),
        }
    }

    tracing::info!(
        "[CONNECTIVITY] Machine {} stopped {}",
        machine.id(),
        machine.state()
    );
    machine.snapshot()
}
