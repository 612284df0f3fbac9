//! MongoDB test infrastructure

use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

const MONGO_PORT: u16 = 27017;

/// MongoDB container for tests
///
/// The container is stopped and removed when this struct is dropped.
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    pub host: String,
    pub port: u16,
}

impl TestMongo {
    /// Start a standalone MongoDB 7 server without authentication or TLS
    pub async fn new() -> Self {
        let container = Mongo::default()
            .with_tag("7")
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let port = container
            .get_host_port_ipv4(MONGO_PORT)
            .await
            .expect("Failed to get MongoDB port");

        tracing::info!(port, "Test MongoDB ready (mongo:7)");

        Self {
            container,
            host: "127.0.0.1".to_string(),
            port,
        }
    }
}
