//! MongoDB connection builder
//!
//! Assembles host, port, credentials, TLS trust roots and connection-string
//! options into a `mongodb::Client`. All network I/O, pooling and session
//! handling stay with the driver; the returned client connects lazily.
//!
//! # Features
//!
//! - `config` - Load builder settings from environment variables with `core_config::FromEnv`
//!
//! # Examples
//!
//! ## Plain connection
//!
//! ```ignore
//! use mongo_connect::mongodb::MongoBuilder;
//!
//! let client = MongoBuilder::new("localhost", "27017", "app", "secret")
//!     .with_retry_writes("false")
//!     .build()
//!     .await?;
//! let db = client.database("mydb");
//! ```
//!
//! ## TLS with a private CA
//!
//! ```ignore
//! use mongo_connect::mongodb::MongoBuilder;
//!
//! // base64 of a PEM bundle, e.g. straight from a Kubernetes secret
//! let ca = std::env::var("MONGODB_TLS_CA")?;
//! let client = MongoBuilder::new("mongo.internal", "27017", "app", "secret")
//!     .with_tls(ca)
//!     .build()
//!     .await?;
//! ```
//!
//! ## From environment (requires `config` feature)
//!
//! ```ignore
//! use core_config::FromEnv;
//! use mongo_connect::mongodb::MongoConfig;
//!
//! let client = MongoConfig::from_env()?.builder().build().await?;
//! ```

pub mod mongodb;

// Re-exports for convenience
pub use crate::mongodb::{MongoBuilder, MongoClient, MongoError, MongoResult};
