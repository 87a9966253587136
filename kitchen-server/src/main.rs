use kitchen_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env, config and logging
    let config = setup_environment();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        port = config.http_port,
        "Kitchen server starting"
    );

    // 2. Database and inventory gateway
    let state = ServerState::initialize(&config).await.map_err(|e| {
        tracing::error!("Failed to initialize server state: {e}");
        e
    })?;

    // 3. Serve until shutdown
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
