use thiserror::Error;

use common::{OrderNumber, Version};

/// Errors that can occur when interacting with a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A concurrency conflict occurred when saving an order.
    /// The expected version did not match the actual version.
    #[error(
        "Concurrency conflict for order {order_number}: expected version {expected}, found {actual}"
    )]
    ConcurrencyConflict {
        order_number: OrderNumber,
        expected: Version,
        actual: Version,
    },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
