use firma_api::{setup, telemetry};
use firma_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    telemetry::init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (storage, token store, upstream client, routes)
    let (_state, router) = setup::initialize_app(config.clone()).await?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
