use mock_responder::{start, ResponderConfig};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    dotenvy::dotenv().ok();

    let handle = start(ResponderConfig::default()).await?;
    handle.wait().await?;

    Ok(())
}
