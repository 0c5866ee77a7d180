// Logging setup shared by the CLI and the server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "country_leaderboard=info,leaderboard_server=info,tower_http=info";
const VERBOSE_FILTER: &str = "country_leaderboard=debug,leaderboard_server=debug,tower_http=debug";

/// Logs go to stderr; `RUST_LOG` overrides the default filter
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
