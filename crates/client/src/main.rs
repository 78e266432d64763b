//! Terminal client entry point.
mod app;
mod config;
mod logging;
mod narration;
mod prompt;
mod render;

use anyhow::Result;
use app::MatchApp;
use config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();

    // Keep the guard alive so the file writer flushes on exit
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    MatchApp::new(config).run().await
}
