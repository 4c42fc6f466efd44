use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use maresul_backend::app::app::App;

#[tokio::main]
async fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .init();

    info!("🚀 Starting Maresul Dealer Portal Backend");

    match dotenv() {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let app = App::new().await;
    app.start().await;
}
