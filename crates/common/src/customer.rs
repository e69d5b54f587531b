//! Customer entity.

use serde::{Deserialize, Serialize};

use crate::types::CustomerNumber;

/// A customer who can place orders.
///
/// Owned independently of any order; an order holds a reference to
/// exactly one customer, not ownership of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique customer identifier.
    pub customer_number: CustomerNumber,

    /// Customer display name.
    pub name: String,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(customer_number: impl Into<CustomerNumber>, name: impl Into<String>) -> Self {
        Self {
            customer_number: customer_number.into(),
            name: name.into(),
        }
    }
}
