//! Server binary: loads config from env, opens the SQLite pool, applies
//! the schema, and serves the API.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use coursebook::{app, connect, ensure_tables, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("coursebook=info")),
        )
        .init();

    let config = Arc::new(AppConfig::from_env()?);
    let pool = connect(&config.database_url, 5).await?;
    ensure_tables(&pool).await?;

    let state = AppState::new(pool, config.clone());
    let app = app(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
