use std::net::SocketAddr;

use anyhow::Result;

use todos_api::{app, AppState, Config, Database};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let config = Config::from_env()?;

    // Run the migration once at startup; handlers reconnect per operation.
    Database::connect(&config.db_path)?;

    let state = AppState {
        db_path: config.db_path,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("todos-api listening on http://{addr}");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
