//! Halcyon marketing site server.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use halcyon_site::{config::AppConfig, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before anything reads the environment
    let _ = dotenv();

    telemetry::init(std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")));

    let config = Arc::new(AppConfig::load()?);
    info!(
        name: "config.loaded",
        address = %config.bind_address(),
        static_dir = %config.site.static_dir.display(),
        "Configuration loaded"
    );

    server::start_server(config).await?;
    Ok(())
}
