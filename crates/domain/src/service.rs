//! Order service: creation, lookup, and patch-merge.

use chrono::Utc;

use common::{Order, OrderLineItem, OrderNumber};
use store::{ArticleStore, OrderStore, SaveOptions, StoreError};

use crate::commands::{CreateOrderCommand, PatchOrderCommand};
use crate::error::DomainError;

/// Service for managing orders.
///
/// Constructed explicitly with an injected order store and article
/// catalog; there is no ambient singleton. Every operation is an
/// independent, short-lived unit of work that validates fully before
/// touching the store.
pub struct OrderService<S: OrderStore, A: ArticleStore> {
    orders: S,
    articles: A,
}

impl<S: OrderStore, A: ArticleStore> OrderService<S, A> {
    /// Creates a new order service with the given stores.
    pub fn new(orders: S, articles: A) -> Self {
        Self { orders, articles }
    }

    /// Creates a new order from a creation command.
    ///
    /// The order is placed with status `PLACED` and today's date, then
    /// persisted. Fails without writing if the order number is taken,
    /// the line items are empty, a quantity is zero, or an article
    /// number does not resolve.
    #[tracing::instrument(skip(self, cmd), fields(order_number = %cmd.order_number))]
    pub async fn create_order(&self, cmd: CreateOrderCommand) -> Result<Order, DomainError> {
        if self
            .orders
            .find_by_order_number(&cmd.order_number)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateOrderNumber {
                order_number: cmd.order_number,
            });
        }

        self.validate_line_items(&cmd.order_line_items).await?;

        let order = Order::place(
            cmd.order_number,
            cmd.customer,
            cmd.order_line_items,
            Utc::now().date_naive(),
        );

        // expect_new closes the race between the duplicate check above
        // and the insert.
        let saved = match self.orders.save(order, SaveOptions::expect_new()).await {
            Ok(saved) => saved,
            Err(StoreError::ConcurrencyConflict { order_number, .. }) => {
                return Err(DomainError::DuplicateOrderNumber { order_number });
            }
            Err(other) => return Err(other.into()),
        };

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_number = %saved.order_number, "order created");
        Ok(saved)
    }

    /// Looks up an order by its order number.
    ///
    /// Absence is a normal empty result, not a failure.
    #[tracing::instrument(skip(self))]
    pub async fn find_order_by_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<Order>, DomainError> {
        Ok(self.orders.find_by_order_number(order_number).await?)
    }

    /// Returns all persisted orders. Ordering is insertion-order-irrelevant.
    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.orders.find_all().await?)
    }

    /// Patches an order's customer and line items.
    ///
    /// The patch is a wholesale replacement: the command's customer and
    /// line-item collection fully supersede the stored ones, no
    /// item-by-item diffing. Only legal while the order is `PLACED`.
    /// A rejected patch persists nothing. Success returns no content;
    /// the save is guarded by the version read here, so a concurrent
    /// writer surfaces as `ConcurrentModification`.
    #[tracing::instrument(skip(self, cmd))]
    pub async fn patch_order(
        &self,
        order_number: &OrderNumber,
        cmd: PatchOrderCommand,
    ) -> Result<(), DomainError> {
        let existing = self
            .orders
            .find_by_order_number(order_number)
            .await?
            .ok_or_else(|| DomainError::OrderNotFound {
                order_number: order_number.clone(),
            })?;

        if !existing.order_status.can_patch() {
            return Err(DomainError::OrderNotMutable {
                order_number: order_number.clone(),
                status: existing.order_status,
            });
        }

        self.validate_line_items(&cmd.order_line_items).await?;

        let expected = existing.version;
        let mut merged = existing;
        merged.customer = cmd.customer;
        merged.order_line_items = cmd.order_line_items;

        self.orders
            .save(merged, SaveOptions::expect_version(expected))
            .await?;

        metrics::counter!("orders_patched_total").increment(1);
        tracing::info!(%order_number, "order patched");
        Ok(())
    }

    /// Validates a line-item collection against the invariants:
    /// non-empty, strictly positive quantities, every article number
    /// resolvable in the catalog.
    async fn validate_line_items(&self, items: &[OrderLineItem]) -> Result<(), DomainError> {
        if items.is_empty() {
            return Err(DomainError::EmptyOrder);
        }

        for item in items {
            if item.quantity == 0 {
                return Err(DomainError::InvalidQuantity {
                    quantity: item.quantity,
                });
            }

            if self
                .articles
                .find_by_article_number(&item.article_number)
                .await?
                .is_none()
            {
                return Err(DomainError::UnknownArticle {
                    article_number: item.article_number.clone(),
                });
            }
        }

        Ok(())
    }
}
