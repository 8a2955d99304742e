/**
 * Offline Monitor Entry Point
 *
 * Line-driven driver for the connectivity machine. Reads commands from
 * stdin and prints every owner notification as one JSON line on stdout:
 *
 *   online | offline   flip the simulated host
 *   force  | undo      force offline / lift the override
 *   status             re-emit the current status
 *   snapshot           print the settled state to stderr
 *   quit               stop
 */

#[cfg(feature = "monitor")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use offline_machine::host::{HostConnectivity, NetworkMonitor};
    use offline_machine::machine::ConnectivityMachine;
    use offline_machine::notify::notification_channel;
    use offline_machine::service::ConnectivityService;
    use offline_machine::shared::{ConnectivityError, MachineConfig};
    use tokio::io::AsyncBufReadExt;

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .with_writer(std::io::stderr)
        .init();

    let config = MachineConfig::from_env()?;
    let host_online = std::env::var("OFFLINE_MONITOR_HOST_ONLINE").unwrap_or_default() == "1";
    let host = NetworkMonitor::new(host_online);

    let (tx, mut notifications) = notification_channel();
    let machine = ConnectivityMachine::new(config, host.clone(), tx);
    tracing::info!(
        "[STARTUP] Monitoring machine {} (host online: {})",
        machine.id(),
        host_online
    );
    let mut service = ConnectivityService::start(machine);

    let printer = tokio::spawn(async move {
        while let Some(notification) = notifications.recv().await {
            match notification.to_json() {
                Ok(line) => println!("{}", line),
                Err(e) => tracing::error!("{}", ConnectivityError::from(e)),
            }
        }
    });

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => {}
            "online" => {
                host.go_online();
            }
            "offline" => {
                host.go_offline();
            }
            "force" => service.force_offline().await?,
            "undo" => service.undo_force_offline().await?,
            "status" => service.request_status().await?,
            "snapshot" => {
                let snapshot = service.snapshot().await?;
                eprintln!(
                    "state={} forced_offline={} host_online={}",
                    snapshot.state,
                    snapshot.context.is_forced_offline,
                    host.is_online()
                );
            }
            "quit" | "exit" => break,
            other => tracing::warn!("Unknown command: {}", other),
        }
    }

    let last = service.stop().await?;
    tracing::info!("[SHUTDOWN] Final state {}", last.state);

    // The machine, and with it the notifier, is gone once the service stopped
    printer.await?;
    Ok(())
}

#[cfg(not(feature = "monitor"))]
fn main() {
    eprintln!("The monitor requires the 'monitor' feature to be enabled.");
    eprintln!("Run with: cargo run --bin offline-monitor --features monitor");
    std::process::exit(1);
}
