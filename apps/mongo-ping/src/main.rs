use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use mongo_connect::mongodb::{MongoConfig, check_health_detailed};
use tracing::{error, info};

/// Build a client from `MONGODB_*` variables and ping the server once.
#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let config = MongoConfig::from_env()?;
    info!(
        "Pinging MongoDB at {}:{} (tls: {})",
        config.host,
        config.port,
        config.tls_ca.is_some()
    );

    let client = config.builder().build().await?;
    let status = check_health_detailed(&client).await;

    if !status.healthy {
        let message = status.message.unwrap_or_default();
        error!("MongoDB unreachable after {}ms: {}", status.response_time_ms, message);
        return Err(eyre::eyre!("MongoDB ping failed: {}", message));
    }

    info!("MongoDB healthy, latency: {}ms", status.response_time_ms);
    Ok(())
}
