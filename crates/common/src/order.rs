//! Order aggregate and its line items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::customer::Customer;
use crate::status::OrderStatus;
use crate::types::{ArticleNumber, Money, OrderId, OrderNumber, Version};

/// A quantity of a specific article captured at order time.
///
/// The descriptive fields are a denormalized snapshot taken from the
/// article when the order was placed; they stay frozen even if the
/// article later changes, preserving historical pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Number of the article this snapshot was taken from.
    pub article_number: ArticleNumber,

    /// Article name at order time.
    pub name: String,

    /// Article description at order time.
    pub description: String,

    /// Price per unit in cents at order time.
    pub unit_price_in_cents: Money,

    /// Quantity ordered, strictly positive.
    pub quantity: u64,
}

impl OrderLineItem {
    /// Creates a line item from explicit snapshot fields.
    pub fn new(
        article_number: impl Into<ArticleNumber>,
        name: impl Into<String>,
        description: impl Into<String>,
        unit_price_in_cents: Money,
        quantity: u64,
    ) -> Self {
        Self {
            article_number: article_number.into(),
            name: name.into(),
            description: description.into(),
            unit_price_in_cents,
            quantity,
        }
    }

    /// Creates a line item by snapshotting an article's current fields.
    pub fn from_article(article: &Article, quantity: u64) -> Self {
        Self {
            article_number: article.article_number.clone(),
            name: article.name.clone(),
            description: article.description.clone(),
            unit_price_in_cents: article.unit_price_in_cents,
            quantity,
        }
    }

    /// Returns the total price for this line (quantity * unit price).
    pub fn total_price(&self) -> Money {
        self.unit_price_in_cents.multiply(self.quantity)
    }
}

/// Order aggregate root.
///
/// Holds exactly one customer reference, a non-empty sequence of line
/// items, and a status governed by [`OrderStatus`]. The order number
/// is assigned at creation and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-facing surrogate identifier.
    pub id: OrderId,

    /// Externally visible unique order number.
    pub order_number: OrderNumber,

    /// The customer who placed the order.
    pub customer: Customer,

    /// Line items, ordered, never empty for a persisted order.
    pub order_line_items: Vec<OrderLineItem>,

    /// Lifecycle status; `PLACED` initially.
    pub order_status: OrderStatus,

    /// Date the order was created. Immutable.
    pub placement_date: NaiveDate,

    /// Persisted version for optimistic concurrency control.
    #[serde(default)]
    pub version: Version,
}

impl Order {
    /// Constructs a freshly placed order.
    ///
    /// Status starts at `PLACED` and the version at its initial value;
    /// the store assigns the first real version on save.
    pub fn place(
        order_number: impl Into<OrderNumber>,
        customer: Customer,
        order_line_items: Vec<OrderLineItem>,
        placement_date: NaiveDate,
    ) -> Self {
        Self {
            id: OrderId::new(),
            order_number: order_number.into(),
            customer,
            order_line_items,
            order_status: OrderStatus::Placed,
            placement_date,
            version: Version::initial(),
        }
    }

    /// Returns the number of line items.
    pub fn line_item_count(&self) -> usize {
        self.order_line_items.len()
    }

    /// Returns the sum of all line totals.
    pub fn total_amount(&self) -> Money {
        self.order_line_items
            .iter()
            .map(OrderLineItem::total_price)
            .fold(Money::zero(), |acc, m| acc + m)
    }
}
