/// Error type for building a MongoDB client
///
/// Every variant is returned straight to the caller; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    /// The CA certificate string is not valid base64
    #[error("Invalid CA certificate encoding: {0}")]
    CaEncoding(#[from] base64::DecodeError),

    /// The decoded CA bundle holds no usable PEM certificate
    #[error("failed to parse root certificate")]
    CaCertificate,

    /// Writing the CA bundle where the driver can read it failed
    #[error("Failed to stage CA certificate: {0}")]
    CaStaging(#[from] std::io::Error),

    /// Driver errors (connection string parsing, client construction)
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// Result type alias for MongoDB builder operations
pub type MongoResult<T> = Result<T, MongoError>;
