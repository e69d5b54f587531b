use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{Article, ArticleNumber, Order, OrderNumber, Version};

use crate::{
    Result, StoreError,
    store::{ArticleStore, OrderStore, SaveOptions},
};

/// In-memory order store implementation.
///
/// Stores whole aggregates in a map keyed by order number and provides
/// the same interface, including version checking, as the PostgreSQL
/// implementation. Used for tests and as the default store when no
/// database is configured.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderNumber, Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of orders stored.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Clears all orders.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn find_by_order_number(&self, order_number: &OrderNumber) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(order_number).cloned())
    }

    async fn save(&self, mut order: Order, options: SaveOptions) -> Result<Order> {
        let mut orders = self.orders.write().await;

        let current_version = orders
            .get(&order.order_number)
            .map(|o| o.version)
            .unwrap_or(Version::initial());

        if let Some(expected) = options.expected_version
            && current_version != expected
        {
            return Err(StoreError::ConcurrencyConflict {
                order_number: order.order_number.clone(),
                expected,
                actual: current_version,
            });
        }

        order.version = current_version.next();
        orders.insert(order.order_number.clone(), order.clone());
        Ok(order)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        Ok(self.orders.read().await.values().cloned().collect())
    }
}

/// In-memory article catalog.
#[derive(Clone, Default)]
pub struct InMemoryArticleStore {
    articles: Arc<RwLock<HashMap<ArticleNumber, Article>>>,
}

impl InMemoryArticleStore {
    /// Creates a new empty in-memory article store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn find_by_article_number(
        &self,
        article_number: &ArticleNumber,
    ) -> Result<Option<Article>> {
        Ok(self.articles.read().await.get(article_number).cloned())
    }

    async fn save(&self, article: Article) -> Result<Article> {
        self.articles
            .write()
            .await
            .insert(article.article_number.clone(), article.clone());
        Ok(article)
    }

    async fn find_all(&self) -> Result<Vec<Article>> {
        Ok(self.articles.read().await.values().cloned().collect())
    }
}
