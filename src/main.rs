use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rental_listings::{api::create_router, application::builder::ApplicationBuilder, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with structured logging; RUST_LOG overrides the default filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!(version = env!("CARGO_PKG_VERSION"), "Starting rental listings service");

    // Load configuration
    let config = Config::from_env();
    config.validate()?;
    info!("Configuration loaded and validated");

    let listen_addr = config.listen_addr.clone();
    let state = ApplicationBuilder::new(config)
        .with_database()
        .await?
        .with_infrastructure()
        .await?
        .build()?;

    let app = create_router(state);

    // Start server
    info!(addr = %listen_addr, "Listening");
    let listener = TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
