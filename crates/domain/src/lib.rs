//! Order lifecycle and patch-merge logic.
//!
//! The [`OrderService`] is the only place orders are created or
//! mutated. It validates commands against the catalog, enforces the
//! status state machine, and persists through an injected
//! [`store::OrderStore`].

pub mod commands;
pub mod error;
pub mod service;

pub use commands::{CreateOrderCommand, PatchOrderCommand};
pub use error::DomainError;
pub use service::OrderService;

pub use common::{
    Article, ArticleNumber, Customer, CustomerNumber, Money, Order, OrderLineItem, OrderNumber,
    OrderStatus,
};
