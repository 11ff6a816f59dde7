//! tally server
//!
//! - `POST /register`, `GET /data` backed by the configured user store
//! - `GET /metrics` in Prometheus text format for scraping
//! - Optional static directory fallback
//!
//! Usage: `tally-server [config.yaml]`; `TALLY_PORT` overrides the listen port.

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use tally_core::error::{Result, TallyError};
use tally_server::{app_state::AppState, config, router, store};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "tally-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut cfg = match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path)?,
        None => config::load_or_default(config::DEFAULT_CONFIG_PATH)?,
    };
    let port = std::env::var("TALLY_PORT").ok();
    cfg.server.apply_port_override(port.as_deref())?;
    let listen = cfg.server.listen_addr()?;

    let store = store::open(&cfg.storage).await?;
    tracing::info!(
        storage = ?cfg.storage.kind,
        static_dir = ?cfg.server.static_dir,
        "storage ready"
    );

    let state = AppState::new(cfg, store)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "tally-server starting");
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| TallyError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TallyError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
