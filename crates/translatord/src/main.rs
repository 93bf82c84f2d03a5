//! Translator Daemon - Error Translator API
//!
//! Matches raw error messages against the pattern catalog and serves
//! plain-English translations over HTTP.

use anyhow::Result;
use tracing::{info, Level};
use translatord::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!(
        "Error Translator API v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let state = AppState::new();
    info!("Pattern catalog loaded: {} patterns", state.catalog.len());

    server::run(state, server::DEFAULT_ADDR).await
}
