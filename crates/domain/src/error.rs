//! Domain error taxonomy.
//!
//! One distinct error kind per cause, so the presentation adapter can
//! map each to a transport-appropriate status code.

use thiserror::Error;

use common::{ArticleNumber, OrderNumber, OrderStatus};
use store::StoreError;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An order with this number already exists.
    #[error("Order number already exists: {order_number}")]
    DuplicateOrderNumber { order_number: OrderNumber },

    /// A line item references an article that is not in the catalog.
    #[error("Unknown article: {article_number}")]
    UnknownArticle { article_number: ArticleNumber },

    /// The order has no line items.
    #[error("Order has no line items")]
    EmptyOrder,

    /// A line item has a non-positive quantity.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u64 },

    /// The order was not found.
    #[error("Order not found: {order_number}")]
    OrderNotFound { order_number: OrderNumber },

    /// The order has advanced past PLACED and can no longer be patched.
    #[error("Order {order_number} is not mutable in status {status}")]
    OrderNotMutable {
        order_number: OrderNumber,
        status: OrderStatus,
    },

    /// The order was modified concurrently between read and save.
    #[error("Concurrent modification of order {order_number}")]
    ConcurrentModification { order_number: OrderNumber },

    /// An error occurred in the store.
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConcurrencyConflict { order_number, .. } => {
                DomainError::ConcurrentModification { order_number }
            }
            other => DomainError::Store(other),
        }
    }
}
