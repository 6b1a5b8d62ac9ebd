//! portscope server
//!
//! - Loads config from `PORTSCOPE_CONFIG` (default `portscope.yaml`)
//! - Preloads configured port ranges into the store
//! - Serves the admin API on `server.listen`

use tracing_subscriber::{fmt, EnvFilter};

use portscope_core::error::{PortScopeError, Result};
use portscope_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portscope-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("PORTSCOPE_CONFIG").unwrap_or_else(|_| "portscope.yaml".into());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(&cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "portscope-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| PortScopeError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| PortScopeError::Internal(format!("server failed: {e}")))
}
