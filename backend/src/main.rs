mod handlers;
mod markdown;
mod request_context;
mod routes;
mod session;
mod state;

use std::env;
use std::path::PathBuf;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

    tracing::info!("Starting PulseFeed backend server");
    tracing::info!("Data directory: {}", data_dir);

    // Initialize application state
    let app_state = state::AppState::new(&PathBuf::from(&data_dir))?;
    tracing::info!("Loaded {} articles", app_state.article_count().await);

    // Build router
    let app = routes::create_router(app_state);

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
    let addr = format!("{}:{}", bind_addr, port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
