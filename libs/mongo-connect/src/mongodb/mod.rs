//! MongoDB connection builder and utilities
//!
//! Builds driver options from discrete connection settings and hands them to
//! the `mongodb` driver.

mod builder;
mod config;
mod error;
mod health;
mod tls;

pub use builder::{MongoBuilder, MongoClient, ResolvedOptions};
pub use config::MongoConfig;
pub use error::{MongoError, MongoResult};
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use tls::TrustStore;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
