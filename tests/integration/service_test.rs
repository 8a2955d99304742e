//! Connectivity service integration tests

use assert_matches::assert_matches;
use offline_machine::host::NetworkMonitor;
use offline_machine::notify::NotificationBroadcast;
use offline_machine::{
    ConnectivityError, ConnectivityMachine, ConnectivityService, ConnectivityState,
    MachineConfig, Notification,
};
use tokio::sync::broadcast;
use tokio::time::{timeout, Duration};

async fn recv(rx: &mut broadcast::Receiver<Notification>) -> Notification {
    timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("notification within a second")
        .expect("broadcast open")
}

fn broadcast_service(host: &NetworkMonitor) -> (ConnectivityService, NotificationBroadcast) {
    let (tx, _) = broadcast::channel::<Notification>(64);
    let machine = ConnectivityMachine::new(MachineConfig::default(), host.clone(), tx.clone());
    (ConnectivityService::start(machine), tx)
}

#[tokio::test]
async fn test_observers_share_the_feed() {
    let host = NetworkMonitor::new(false);
    let (tx, _) = broadcast::channel::<Notification>(64);
    let mut first = tx.subscribe();
    let mut second = tx.subscribe();
    let machine = ConnectivityMachine::new(MachineConfig::default(), host.clone(), tx);
    let service = ConnectivityService::start(machine);

    assert!(!recv(&mut first).await.is_online());
    assert!(!recv(&mut second).await.is_online());

    host.go_online();
    assert!(recv(&mut first).await.is_online());
    assert!(recv(&mut second).await.is_online());

    drop(service);
}

#[tokio::test]
async fn test_dropped_service_releases_listeners() {
    let host = NetworkMonitor::new(false);
    let (service, _tx) = broadcast_service(&host);
    let handle = service.handle();
    handle.snapshot().await.unwrap();
    assert_eq!(host.pending_listeners(), 1);

    drop(service);
    timeout(Duration::from_secs(1), async {
        while host.pending_listeners() != 0 {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("aborted task drops its machine");
    assert!(handle.is_closed());
    assert_matches!(
        handle.snapshot().await,
        Err(ConnectivityError::ServiceClosed)
    );
}

#[tokio::test]
async fn test_user_override_round_trip() {
    let host = NetworkMonitor::new(true);
    let (mut service, tx) = broadcast_service(&host);

    let handle = service.handle();
    assert_eq!(handle.snapshot().await.unwrap().state, ConnectivityState::Online);
    // Subscribe past the entry notifications
    let mut rx = tx.subscribe();

    handle.force_offline().await.unwrap();
    let forced = recv(&mut rx).await;
    assert!(!forced.is_online());
    assert!(forced.is_forced_offline);

    host.go_offline();
    handle.undo_force_offline().await.unwrap();
    let lifted = recv(&mut rx).await;
    assert!(!lifted.is_online());
    assert!(!lifted.is_forced_offline);

    host.go_online();
    assert!(recv(&mut rx).await.is_online());

    let last = service.stop().await.unwrap();
    assert_eq!(last.state, ConnectivityState::Online);
    assert!(!last.context.is_forced_offline);
}

#[tokio::test]
async fn test_requests_after_stop_fail() {
    let host = NetworkMonitor::new(false);
    let (mut service, _tx) = broadcast_service(&host);
    let handle = service.handle();

    service.stop().await.unwrap();
    assert!(handle.is_closed());
    assert_matches!(
        handle.request_status().await,
        Err(ConnectivityError::ServiceClosed)
    );
}

#[tokio::test]
async fn test_stopped_service_releases_listeners() {
    let host = NetworkMonitor::new(false);
    let (mut service, _tx) = broadcast_service(&host);
    service.snapshot().await.unwrap();
    assert_eq!(host.pending_listeners(), 1);

    service.stop().await.unwrap();
    assert_eq!(host.pending_listeners(), 0);
}
