use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use common::{Article, ArticleNumber, Order, OrderNumber, Version};

use crate::{
    Result, StoreError,
    store::{ArticleStore, OrderStore, SaveOptions},
};

/// PostgreSQL-backed order store.
///
/// Each order is persisted as a single JSONB document row, so the
/// customer reference and the full line-item collection are replaced
/// together in one statement. The version check runs inside a
/// transaction with a row lock.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgreSQL order store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_order(row: PgRow) -> Result<Order> {
        let data: serde_json::Value = row.try_get("data")?;
        let order: Order = serde_json::from_value(data)?;
        Ok(order)
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn find_by_order_number(&self, order_number: &OrderNumber) -> Result<Option<Order>> {
        let row = sqlx::query("SELECT data FROM orders WHERE order_number = $1")
            .bind(order_number.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_order).transpose()
    }

    async fn save(&self, mut order: Order, options: SaveOptions) -> Result<Order> {
        let mut tx = self.pool.begin().await?;

        let current_version: Option<i64> =
            sqlx::query_scalar("SELECT version FROM orders WHERE order_number = $1 FOR UPDATE")
                .bind(order.order_number.as_str())
                .fetch_optional(&mut *tx)
                .await?;

        let actual = current_version.map(Version::new).unwrap_or(Version::initial());

        if let Some(expected) = options.expected_version
            && actual != expected
        {
            return Err(StoreError::ConcurrencyConflict {
                order_number: order.order_number.clone(),
                expected,
                actual,
            });
        }

        order.version = actual.next();
        let data = serde_json::to_value(&order)?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, order_number, version, placement_date, data)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (order_number) DO UPDATE
            SET version = EXCLUDED.version, data = EXCLUDED.data
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(order.order_number.as_str())
        .bind(order.version.as_i64())
        .bind(order.placement_date)
        .bind(&data)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(order)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query("SELECT data FROM orders ORDER BY placement_date, order_number")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }
}

/// PostgreSQL-backed article catalog.
#[derive(Clone)]
pub struct PostgresArticleStore {
    pool: PgPool,
}

impl PostgresArticleStore {
    /// Creates a new PostgreSQL article store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_article(row: PgRow) -> Result<Article> {
        let data: serde_json::Value = row.try_get("data")?;
        let article: Article = serde_json::from_value(data)?;
        Ok(article)
    }
}

#[async_trait]
impl ArticleStore for PostgresArticleStore {
    async fn find_by_article_number(
        &self,
        article_number: &ArticleNumber,
    ) -> Result<Option<Article>> {
        let row = sqlx::query("SELECT data FROM articles WHERE article_number = $1")
            .bind(article_number.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_article).transpose()
    }

    async fn save(&self, article: Article) -> Result<Article> {
        let data = serde_json::to_value(&article)?;

        sqlx::query(
            r#"
            INSERT INTO articles (article_number, data)
            VALUES ($1, $2)
            ON CONFLICT (article_number) DO UPDATE SET data = EXCLUDED.data
            "#,
        )
        .bind(article.article_number.as_str())
        .bind(&data)
        .execute(&self.pool)
        .await?;

        Ok(article)
    }

    async fn find_all(&self) -> Result<Vec<Article>> {
        let rows = sqlx::query("SELECT data FROM articles ORDER BY article_number")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_article).collect()
    }
}
