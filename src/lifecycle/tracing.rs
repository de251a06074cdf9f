//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Without `RUST_LOG` the crate logs at `info`, which is what prints the
//! per-unit "Picking up ..." lines while an order runs.
//!
//! ```bash
//! # Default: one line per pick and per order
//! cargo run
//!
//! # Include every TCP send and the generated coordinates
//! RUST_LOG=pick_robot=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pick_robot=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths
        .compact()
        .init();
}
