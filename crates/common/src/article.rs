//! Catalog article entity.

use serde::{Deserialize, Serialize};

use crate::types::{ArticleNumber, Money};

/// A catalog article.
///
/// Once referenced by an order line item, the article's descriptive
/// fields are snapshotted onto the line item and never updated there,
/// even if the article itself changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique article identifier.
    pub article_number: ArticleNumber,

    /// Human-readable article name.
    pub name: String,

    /// Longer description text.
    pub description: String,

    /// Price per unit in cents, never negative.
    pub unit_price_in_cents: Money,

    /// Units currently in stock. Decremented on fulfillment, which is
    /// outside this system's scope.
    pub items_in_stock: u64,
}

impl Article {
    /// Creates a new article.
    pub fn new(
        article_number: impl Into<ArticleNumber>,
        name: impl Into<String>,
        description: impl Into<String>,
        unit_price_in_cents: Money,
        items_in_stock: u64,
    ) -> Self {
        Self {
            article_number: article_number.into(),
            name: name.into(),
            description: description.into(),
            unit_price_in_cents,
            items_in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_serializes_with_camel_case_fields() {
        let article = Article::new("nr", "name", "dr", Money::from_cents(10), 120);
        let json = serde_json::to_value(&article).unwrap();

        assert_eq!(json["articleNumber"], "nr");
        assert_eq!(json["unitPriceInCents"], 10);
        assert_eq!(json["itemsInStock"], 120);
    }

    #[test]
    fn article_roundtrip() {
        let article = Article::new("A-1", "Widget", "A widget", Money::from_cents(999), 5);
        let json = serde_json::to_string(&article).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(article, back);
    }
}
