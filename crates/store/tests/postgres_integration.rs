//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency.
//! Run with:
//!
//! ```bash
//! cargo test -p store --test postgres_integration -- --test-threads=1
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use common::{Article, ArticleNumber, Customer, Money, Order, OrderLineItem, OrderNumber, Version};
use sqlx::PgPool;
use store::{
    ArticleStore, OrderStore, PostgresArticleStore, PostgresOrderStore, SaveOptions, StoreError,
};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            // Create a temporary pool just for migrations
            let temp_pool = PgPool::connect(&connection_string).await.unwrap();

            sqlx::raw_sql(include_str!(
                "../../../migrations/001_create_order_tables.sql"
            ))
            .execute(&temp_pool)
            .await
            .unwrap();

            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get fresh stores with their own pool and cleared tables
async fn get_test_stores() -> (PostgresOrderStore, PostgresArticleStore) {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    // Clear tables for test isolation
    sqlx::query("TRUNCATE TABLE orders, articles")
        .execute(&pool)
        .await
        .unwrap();

    (
        PostgresOrderStore::new(pool.clone()),
        PostgresArticleStore::new(pool),
    )
}

fn test_order(order_number: &str) -> Order {
    Order::place(
        order_number,
        Customer::new("nr", "name"),
        vec![OrderLineItem::new("nr", "name", "dr", Money::from_cents(12), 4)],
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
    )
}

#[tokio::test]
async fn save_and_find_order() {
    let (orders, _) = get_test_stores().await;

    let saved = orders
        .save(test_order("HI"), SaveOptions::expect_new())
        .await
        .unwrap();
    assert_eq!(saved.version, Version::first());

    let found = orders
        .find_by_order_number(&OrderNumber::new("HI"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, saved);
    assert_eq!(found.customer.customer_number.as_str(), "nr");
    assert_eq!(found.order_line_items.len(), 1);
}

#[tokio::test]
async fn find_missing_order_is_none() {
    let (orders, _) = get_test_stores().await;

    let found = orders
        .find_by_order_number(&OrderNumber::new("ZZ"))
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn expect_new_conflicts_with_existing_order() {
    let (orders, _) = get_test_stores().await;

    orders
        .save(test_order("HI"), SaveOptions::expect_new())
        .await
        .unwrap();

    let result = orders
        .save(test_order("HI"), SaveOptions::expect_new())
        .await;
    assert!(matches!(
        result,
        Err(StoreError::ConcurrencyConflict { .. })
    ));
}

#[tokio::test]
async fn stale_version_conflicts() {
    let (orders, _) = get_test_stores().await;

    let first = orders
        .save(test_order("HI"), SaveOptions::expect_new())
        .await
        .unwrap();

    orders
        .save(first.clone(), SaveOptions::expect_version(first.version))
        .await
        .unwrap();

    let result = orders
        .save(first.clone(), SaveOptions::expect_version(first.version))
        .await;
    assert!(matches!(
        result,
        Err(StoreError::ConcurrencyConflict { expected, actual, .. })
            if expected == Version::first() && actual == Version::new(2)
    ));
}

#[tokio::test]
async fn save_replaces_whole_aggregate() {
    let (orders, _) = get_test_stores().await;

    let saved = orders
        .save(test_order("HI"), SaveOptions::expect_new())
        .await
        .unwrap();

    let mut patched = saved.clone();
    patched.customer = Customer::new("n43r", "na234me");
    patched.order_line_items = vec![
        OrderLineItem::new("a2", "other", "desc", Money::from_cents(5), 1),
        OrderLineItem::new("a3", "third", "desc", Money::from_cents(7), 2),
    ];

    orders
        .save(patched, SaveOptions::expect_version(saved.version))
        .await
        .unwrap();

    let found = orders
        .find_by_order_number(&OrderNumber::new("HI"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.customer.customer_number.as_str(), "n43r");
    assert_eq!(found.order_line_items.len(), 2);
    assert_eq!(found.version, Version::new(2));
}

#[tokio::test]
async fn find_all_returns_every_order() {
    let (orders, _) = get_test_stores().await;

    orders
        .save(test_order("A"), SaveOptions::expect_new())
        .await
        .unwrap();
    orders
        .save(test_order("B"), SaveOptions::expect_new())
        .await
        .unwrap();

    let all = orders.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn article_store_roundtrip() {
    let (_, articles) = get_test_stores().await;

    let article = Article::new("nr", "name", "dr", Money::from_cents(10), 120);
    articles.save(article.clone()).await.unwrap();

    let found = articles
        .find_by_article_number(&ArticleNumber::new("nr"))
        .await
        .unwrap();
    assert_eq!(found, Some(article.clone()));

    // Upsert replaces the document
    let mut updated = article;
    updated.items_in_stock = 80;
    articles.save(updated.clone()).await.unwrap();

    let found = articles
        .find_by_article_number(&ArticleNumber::new("nr"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.items_in_stock, 80);

    let all = articles.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
}
