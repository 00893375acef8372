use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mock_server::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let listener = TcpListener::bind(config.addr()).await?;
    mock_server::run(listener).await?;
    Ok(())
}
