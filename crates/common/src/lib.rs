//! Shared data model for the order-management system.

pub mod article;
pub mod customer;
pub mod order;
pub mod status;
pub mod types;

pub use article::Article;
pub use customer::Customer;
pub use order::{Order, OrderLineItem};
pub use status::OrderStatus;
pub use types::{ArticleNumber, CustomerNumber, Money, OrderId, OrderNumber, Version};
