use store_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // 1. .env, configuration, logging
    let config = setup_environment();

    tracing::info!(
        "store-server {} starting (env: {})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    // 2. Database + state
    let state = ServerState::initialize(&config).await.map_err(|e| {
        tracing::error!("Failed to initialize: {}", e);
        e
    })?;

    // 3. Serve until ctrl-c
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
