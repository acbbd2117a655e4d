pub mod error;
pub mod routes;
pub mod state;

use tokio::net::TcpListener;

use metrodocs::ServerConfig;

pub use error::{ApiError, ServerError};
pub use routes::build_router;
pub use state::AppState;

/// Binds the configured address and serves until ctrl-c.
pub async fn serve(config: &ServerConfig) -> Result<(), ServerError> {
    let state = AppState::from_config(config)?;
    let router = build_router(state, config);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    log::info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
