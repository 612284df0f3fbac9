#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_optional, env_or_default, env_parse};

use super::MongoBuilder;

/// MongoDB connection settings
///
/// Plain data that turns into a [`MongoBuilder`]. It can be constructed
/// manually or loaded from environment variables (with `config` feature).
///
/// # Example
///
/// ```ignore
/// use mongo_connect::mongodb::MongoConfig;
///
/// // Manual construction
/// let config = MongoConfig::new("localhost").with_credentials("app", "secret");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env()?;
///
/// let client = config.builder().build().await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Server host name or address (required)
    pub host: String,

    /// Server port
    pub port: u16,

    /// Username; empty means anonymous
    pub username: String,

    /// Password; empty means anonymous
    pub password: String,

    /// Base64 of a PEM CA bundle; enables TLS when set
    pub tls_ca: Option<String>,

    /// Value for the `retryWrites` option, passed through as given
    pub retry_writes: Option<String>,
}

impl MongoConfig {
    /// Create a config for an anonymous, plain-text connection on the default port
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_tls_ca(mut self, ca_certificate: impl Into<String>) -> Self {
        self.tls_ca = Some(ca_certificate.into());
        self
    }

    /// Turn the settings into a builder
    pub fn builder(&self) -> MongoBuilder {
        let mut builder = MongoBuilder::new(
            self.host.clone(),
            self.port.to_string(),
            self.username.clone(),
            self.password.clone(),
        );

        if let Some(ref ca) = self.tls_ca {
            builder = builder.with_tls(ca.clone());
        }
        if let Some(ref retry_writes) = self.retry_writes {
            builder = builder.with_retry_writes(retry_writes.clone());
        }

        builder
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            username: String::new(),
            password: String::new(),
            tls_ca: None,
            retry_writes: None,
        }
    }
}

/// Load MongoConfig from environment variables
///
/// Environment variables:
/// - `MONGODB_HOST` or `MONGO_HOST` (required) - Server host
/// - `MONGODB_PORT` (optional, default: 27017) - Server port
/// - `MONGODB_USERNAME` / `MONGODB_PASSWORD` (optional) - Credentials, both or neither
/// - `MONGODB_TLS_CA` (optional) - Base64 PEM CA bundle, enables TLS
/// - `MONGODB_RETRY_WRITES` (optional) - `retryWrites` option
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("MONGODB_HOST")
            .or_else(|_| std::env::var("MONGO_HOST"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_HOST or MONGO_HOST".to_string()))?;

        Ok(Self {
            host,
            port: env_parse("MONGODB_PORT", 27017)?,
            username: env_or_default("MONGODB_USERNAME", ""),
            password: env_or_default("MONGODB_PASSWORD", ""),
            tls_ca: env_optional("MONGODB_TLS_CA"),
            retry_writes: env_optional("MONGODB_RETRY_WRITES"),
        })
    }
}
