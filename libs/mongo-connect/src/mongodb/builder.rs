use mongodb::Client;
use mongodb::options::{ClientOptions, Credential, Tls, TlsOptions};
use std::fmt;
use std::ops::Deref;
use std::path::Path;
use tempfile::TempPath;
use tracing::debug;

use super::{MongoResult, TrustStore};

const TLS_PARAM: &str = "tls";
const RETRY_WRITES_PARAM: &str = "retryWrites";

/// Options that toggle TLS; only `with_tls` may set them
const RESERVED_TLS_PARAMS: [&str; 2] = [TLS_PARAM, "ssl"];

/// Builder for a MongoDB client
///
/// Collects connection settings and assembles the driver options in one pass
/// when [`MongoBuilder::build`] is called. Chained methods consume and return
/// the builder, so a half-configured value is never shared.
///
/// # Example
/// ```ignore
/// use mongo_connect::mongodb::MongoBuilder;
///
/// let client = MongoBuilder::new("localhost", "27017", "app", "secret")
///     .with_tls(ca_base64)
///     .with_retry_writes("false")
///     .build()
///     .await?;
/// ```
#[derive(Clone)]
pub struct MongoBuilder {
    host: String,
    port: String,
    username: String,
    password: String,

    /// Base64 CA bundle; `Some` means TLS was requested
    ca_certificate: Option<String>,

    /// Connection-string query options, in insertion order
    params: Vec<(String, String)>,
}

impl MongoBuilder {
    /// Create a builder from connection settings
    ///
    /// Nothing is validated here. A malformed host or port surfaces as a
    /// driver error from [`MongoBuilder::build`].
    pub fn new(
        host: impl Into<String>,
        port: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            username: username.into(),
            password: password.into(),
            ca_certificate: None,
            params: Vec::new(),
        }
    }

    /// Enable TLS, trusting the CA bundle in `ca_certificate`
    ///
    /// `ca_certificate` is base64 of one or more PEM certificates. It is only
    /// decoded at build time. Calling this again replaces the previous bundle.
    pub fn with_tls(mut self, ca_certificate: impl Into<String>) -> Self {
        self.ca_certificate = Some(ca_certificate.into());
        self.set_param(TLS_PARAM, "true");
        self
    }

    /// Set the `retryWrites` option
    ///
    /// The value is passed to the driver as given; the driver decides what
    /// it accepts.
    pub fn with_retry_writes(mut self, value: impl Into<String>) -> Self {
        self.set_param(RETRY_WRITES_PARAM, value);
        self
    }

    /// Set any other connection-string option (e.g. `appName`, `authSource`)
    ///
    /// `tls` and its alias `ssl` (any case) are ignored; TLS is enabled only
    /// through [`MongoBuilder::with_tls`].
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if RESERVED_TLS_PARAMS
            .iter()
            .any(|reserved| key.eq_ignore_ascii_case(reserved))
        {
            debug!("Ignoring connection option {}; use with_tls instead", key);
            return self;
        }

        self.set_param(key, value);
        self
    }

    fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Whether TLS was requested
    pub fn uses_tls(&self) -> bool {
        self.ca_certificate.is_some()
    }

    /// Query options in the order they were first set
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Compose `mongodb://<host>:<port>[/?k=v&...]`
    ///
    /// Option keys and values are percent-encoded; host and port are used
    /// verbatim.
    pub fn connection_string(&self) -> String {
        let mut uri = format!("mongodb://{}:{}", self.host, self.port);

        if !self.params.is_empty() {
            let query = self
                .params
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            uri.push_str("/?");
            uri.push_str(&query);
        }

        uri
    }

    /// Username/password credential, or `None` for anonymous access
    ///
    /// A credential is only produced when both username and password are set.
    pub fn credential(&self) -> Option<Credential> {
        if self.username.is_empty() || self.password.is_empty() {
            return None;
        }

        Some(
            Credential::builder()
                .username(self.username.clone())
                .password(self.password.clone())
                .build(),
        )
    }

    /// Resolve the CA bundle into a trust store, if TLS was requested
    pub fn trust_store(&self) -> MongoResult<Option<TrustStore>> {
        self.ca_certificate
            .as_deref()
            .map(TrustStore::from_base64)
            .transpose()
    }

    /// Assemble driver options: connection string, then credential, then TLS
    ///
    /// Any failure aborts the whole assembly.
    pub async fn client_options(&self) -> MongoResult<ResolvedOptions> {
        let uri = self.connection_string();
        debug!(
            "Assembling MongoDB options for {}:{} ({} connection option(s))",
            self.host,
            self.port,
            self.params.len()
        );

        let mut options = ClientOptions::parse(uri.as_str()).await?;

        if let Some(credential) = self.credential() {
            // Keep anything the connection string put there (authSource, mechanism)
            let mut merged = options.credential.take().unwrap_or_default();
            merged.username = credential.username;
            merged.password = credential.password;
            options.credential = Some(merged);
        }

        let ca_file = match self.trust_store()? {
            Some(store) => {
                let path = store.stage()?;
                let tls_options = TlsOptions::builder()
                    .ca_file_path(path.to_path_buf())
                    .build();
                options.tls = Some(Tls::Enabled(tls_options));
                Some(path)
            }
            None => None,
        };

        Ok(ResolvedOptions { options, ca_file })
    }

    /// Build the client
    ///
    /// No connection is opened here; the driver connects on first use.
    /// Dropping the returned future cancels the build.
    pub async fn build(self) -> MongoResult<MongoClient> {
        let ResolvedOptions { options, ca_file } = self.client_options().await?;
        let client = Client::with_options(options)?;

        debug!(
            "MongoDB client created for {}:{} (tls: {})",
            self.host,
            self.port,
            ca_file.is_some()
        );
        Ok(MongoClient { client, ca_file })
    }
}

impl fmt::Debug for MongoBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoBuilder")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("tls", &self.uses_tls())
            .field("params", &self.params)
            .finish()
    }
}

/// Driver options assembled by [`MongoBuilder::client_options`]
///
/// Holds the staged CA file, which must outlive client construction.
#[derive(Debug)]
pub struct ResolvedOptions {
    pub options: ClientOptions,
    ca_file: Option<TempPath>,
}

impl ResolvedOptions {
    /// Path of the staged CA bundle, when TLS was requested
    pub fn ca_file(&self) -> Option<&Path> {
        self.ca_file.as_deref()
    }
}

/// Lazily connected MongoDB client
///
/// Derefs to [`mongodb::Client`]. Owns the staged CA bundle and removes it on drop.
#[derive(Debug)]
pub struct MongoClient {
    client: Client,
    ca_file: Option<TempPath>,
}

impl MongoClient {
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Path of the staged CA bundle, when TLS is enabled
    pub fn ca_file(&self) -> Option<&Path> {
        self.ca_file.as_deref()
    }

    /// Take the driver client, removing the staged CA bundle
    ///
    /// The driver reads the bundle while the client is constructed, so the
    /// returned client keeps its trust roots.
    pub fn into_inner(self) -> Client {
        self.client
    }
}

impl Deref for MongoClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}
