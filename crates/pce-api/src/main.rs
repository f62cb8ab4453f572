//! Parser config editor API — REST server for validating parser
//! configurations and dry-running them against sample logs.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pce_api::config::ApiConfig;
use pce_api::routes;
use pce_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pce-api starting");

    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => ApiConfig::from_file(&path)?,
        None => {
            tracing::info!("no config file given, using defaults");
            ApiConfig::default()
        }
    }
    .apply_env()?;

    let schema = config.load_schema()?;
    tracing::info!(
        schema_path = config.schema_path.as_deref().unwrap_or("<builtin>"),
        schema_len = schema.len(),
        "rules schema loaded"
    );

    // ── Service ─────────────────────────────────────────────────
    let state = AppState::with_engine(
        std::sync::Arc::new(pce_engine::RegexParserEngine::new()),
        schema,
    );
    let app = routes::build_router(state);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
