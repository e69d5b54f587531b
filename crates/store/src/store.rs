use async_trait::async_trait;

use common::{Article, ArticleNumber, Order, OrderNumber, Version};

use crate::Result;

/// Options for saving an order.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Expected version of the order for optimistic concurrency control.
    /// If None, no version check is performed (use with caution).
    pub expected_version: Option<Version>,
}

impl SaveOptions {
    /// Creates options with no version check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options expecting the order to be at a specific version.
    pub fn expect_version(version: Version) -> Self {
        Self {
            expected_version: Some(version),
        }
    }

    /// Creates options expecting the order to not exist yet.
    pub fn expect_new() -> Self {
        Self {
            expected_version: Some(Version::initial()),
        }
    }
}

/// Persistence boundary for orders, keyed by order number.
///
/// All implementations must be thread-safe (Send + Sync). A save is
/// atomic with respect to the whole aggregate: the customer reference
/// and the full line-item collection persist together or not at all.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Looks up an order by its order number.
    ///
    /// Absence is a normal empty result, not an error.
    async fn find_by_order_number(&self, order_number: &OrderNumber) -> Result<Option<Order>>;

    /// Saves an order, inserting or replacing the whole aggregate.
    ///
    /// If `options.expected_version` is set, the save fails with
    /// `ConcurrencyConflict` when the stored version doesn't match.
    /// Returns the saved order with its new version populated.
    async fn save(&self, order: Order, options: SaveOptions) -> Result<Order>;

    /// Returns all persisted orders. Ordering is unspecified.
    async fn find_all(&self) -> Result<Vec<Order>>;
}

/// Persistence boundary for the article catalog.
///
/// Articles are read-mostly; order processing never mutates them.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Looks up an article by its article number.
    async fn find_by_article_number(
        &self,
        article_number: &ArticleNumber,
    ) -> Result<Option<Article>>;

    /// Inserts or replaces an article.
    async fn save(&self, article: Article) -> Result<Article>;

    /// Returns all catalog articles.
    async fn find_all(&self) -> Result<Vec<Article>>;
}
