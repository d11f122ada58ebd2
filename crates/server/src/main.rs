//! Stringprops server binary.
//!
//! Loads configuration from `stringprops.*` config files and
//! `STRINGPROPS__`-prefixed environment variables, then serves the REST
//! API until shutdown.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
