use store_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, data directory, logging)
    setup_environment()?;

    print_banner();

    tracing::info!("BikeStore server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize server state (database, JWT service)
    let state = ServerState::initialize(&config).await;

    // 4. Run the HTTP server until ctrl-c
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
