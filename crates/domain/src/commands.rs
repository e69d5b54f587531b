//! Commands accepted by the order service.
//!
//! These double as the HTTP request bodies, so field names follow the
//! entity attribute names (`orderNumber`, `orderLineItems`, ...).

use serde::{Deserialize, Serialize};

use common::{Customer, OrderLineItem, OrderNumber};

/// Command to create a new order.
///
/// Line items carry their full snapshot fields as provided by the
/// caller; the service only checks that each article number resolves
/// to an existing catalog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderCommand {
    pub order_number: OrderNumber,
    pub customer: Customer,
    pub order_line_items: Vec<OrderLineItem>,
}

impl CreateOrderCommand {
    /// Creates a new create-order command.
    pub fn new(
        order_number: impl Into<OrderNumber>,
        customer: Customer,
        order_line_items: Vec<OrderLineItem>,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            customer,
            order_line_items,
        }
    }
}

/// Command to patch an existing order.
///
/// A patch is a wholesale replacement: the new customer and the new
/// line-item collection fully supersede the old ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchOrderCommand {
    pub customer: Customer,
    pub order_line_items: Vec<OrderLineItem>,
}

impl PatchOrderCommand {
    /// Creates a new patch-order command.
    pub fn new(customer: Customer, order_line_items: Vec<OrderLineItem>) -> Self {
        Self {
            customer,
            order_line_items,
        }
    }
}
