/**
 * Taskdeck Server Entry Point
 *
 * This is the main entry point for the taskdeck backend server. It
 * loads configuration, initializes logging, and starts the Axum HTTP
 * server.
 *
 * Configuration is strict on purpose: a missing `JWT_SECRET` or
 * `DATABASE_URL` ends the process here, before anything listens.
 */

use taskdeck::server::config::AppConfig;
use taskdeck::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing, defaulting to info
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Validate configuration before doing anything else
    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration error: {}", e);
        e
    })?;

    // Create the Axum app
    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
