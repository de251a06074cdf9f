//! Interactive pick station.
//!
//! Seeds the demo orders, then processes one order per press of ENTER until Ctrl+C
//! or end of input. The controller address and ports come from `PICK_ROBOT_*`
//! environment variables (see [`pick_robot::config`]).

use std::io::{BufRead, Write};
use std::thread;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use pick_robot::config::StationConfig;
use pick_robot::lifecycle::{sample_catalog, sample_orders, setup_tracing, PickSystem};
use pick_robot::station::{ProcessOutcome, StationClient};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StationConfig::from_env().map_err(|e| e.to_string())?;
    info!(
        host = %config.robot.host,
        dashboard_port = config.robot.dashboard_port,
        script_port = config.robot.script_port,
        "Starting pick station"
    );

    let system = PickSystem::new(&config);

    let catalog = sample_catalog().map_err(|e| e.to_string())?;
    let orders = sample_orders(&catalog).map_err(|e| e.to_string())?;
    system.seed(orders).await.map_err(|e| e.to_string())?;
    println!("Seeded sample orders.\n");

    println!("Item Sorter Robot\n");
    println!("Press ENTER to process the NEXT order. Press Ctrl+C to exit.\n");

    let shell_result = tokio::select! {
        result = run_shell(&system.station_client) => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };

    match shell_result {
        Some(result) => system.finish(result).await,
        None => {
            // An order in flight is not finished.
            println!();
            info!("Interrupted");
            system.abort().await;
            Ok(())
        }
    }
}

/// Reads stdin on a dedicated thread and forwards one trigger per line, so the runtime
/// never blocks on the terminal. The channel closes at end of input.
fn spawn_trigger_thread() -> mpsc::Receiver<()> {
    let (sender, receiver) = mpsc::channel(1);

    thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if sender.blocking_send(()).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
    });

    receiver
}

/// Waits for ENTER, triggers the station, reports, repeats. Returns at end of input.
async fn run_shell(client: &StationClient) -> Result<(), String> {
    let mut triggers = spawn_trigger_thread();

    loop {
        print!("Ready> ");
        std::io::stdout().flush().map_err(|e| e.to_string())?;

        if triggers.recv().await.is_none() {
            println!();
            return Ok(());
        }

        let (progress, mut events) = mpsc::unbounded_channel();
        let printer = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                println!("{event}");
            }
        });

        let outcome = client.process_next_order_with_progress(progress).await;
        // The station has dropped its sender, so the printer drains and ends.
        let _ = printer.await;

        match outcome {
            Ok(ProcessOutcome::NoPendingOrders) => println!("No pending orders.\n"),
            Ok(ProcessOutcome::Completed { .. }) => {
                println!("Order complete. Conveyor puts a new empty box at S.\n")
            }
            Err(e) => {
                error!(error = %e, "Order failed");
                println!("Order failed: {e}\n");
            }
        }
    }
}
