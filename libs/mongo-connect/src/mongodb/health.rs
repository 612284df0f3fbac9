use mongodb::Client;
use mongodb::bson::doc;
use std::time::Instant;
use tracing::warn;

/// Result of a `ping` against the server
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the server answered the ping
    pub healthy: bool,
    /// Error details when the ping failed
    pub message: Option<String>,
    /// Round trip in milliseconds, including server selection
    pub response_time_ms: u64,
}

/// Ping the `admin` database
///
/// The builder hands out a lazily connected client; this is the first call
/// that actually reaches the server.
///
/// # Example
/// ```ignore
/// use mongo_connect::mongodb::{MongoBuilder, check_health};
///
/// let client = MongoBuilder::new("localhost", "27017", "", "").build().await?;
/// let healthy = check_health(&client).await;
/// ```
pub async fn check_health(client: &Client) -> bool {
    check_health_detailed(client).await.healthy
}

/// Ping the `admin` database and report latency and errors
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = client.database("admin").run_command(doc! { "ping": 1 }).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => {
            warn!("MongoDB ping failed after {}ms: {}", response_time_ms, e);
            HealthStatus {
                healthy: false,
                message: Some(e.to_string()),
                response_time_ms,
            }
        }
    }
}
