//! User CRUD API Server

mod config;
mod envelope;
mod error;
mod handlers;
mod routes;
mod state;


use std::net::SocketAddr;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    let config = config::AppConfig::from_env()?;
    init_tracing(config.log_json);

    if let Err(e) = dotenv {
        debug!("No .env file loaded: {}", e);
    }

    info!("Starting User CRUD API Server");

    // Connect, verify and prepare the schema before binding
    let state = state::AppState::new(&config).await?;

    let addr: SocketAddr = state.config.bind_address().parse()?;

    // Build router
    let app = routes::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "info,user_crud_api=debug,user_crud_core=debug".into()),
    );

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
