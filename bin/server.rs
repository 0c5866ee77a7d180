// Country Leaderboard - Web Server
// Serves leaderboard views over a snapshot loaded at startup

use anyhow::{Context, Result};
use country_leaderboard::api::{router, AppState};
use country_leaderboard::telemetry::init_tracing;
use country_leaderboard::{load_snapshot, LeaderboardConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(false);

    let config = LeaderboardConfig::resolve(None)?;
    let snapshot_path = config
        .snapshot_path()
        .context("No snapshot configured (set LEADERBOARD_SNAPSHOT or \"snapshot\" in the config)")?;
    let snapshot = load_snapshot(&snapshot_path)?;

    let addr = config.server.addr.clone();
    let app = router(AppState::new(snapshot, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!(%addr, "leaderboard server listening");

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
