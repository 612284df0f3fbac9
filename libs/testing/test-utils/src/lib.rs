//! Shared test utilities
//!
//! - `TestMongo`: MongoDB container with automatic cleanup
//!
//! Tests using these helpers need a running Docker daemon and are marked
//! `#[ignore]` in this workspace.
//!
//! ```rust,ignore
//! use test_utils::TestMongo;
//!
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let client = MongoBuilder::new(&mongo.host, mongo.port.to_string(), "", "")
//!         .build()
//!         .await
//!         .unwrap();
//! }
//! ```

mod mongo;

pub use mongo::TestMongo;
