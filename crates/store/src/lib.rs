pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use common::{Order, OrderNumber, Version};
pub use error::{Result, StoreError};
pub use memory::{InMemoryArticleStore, InMemoryOrderStore};
pub use postgres::{PostgresArticleStore, PostgresOrderStore};
pub use store::{ArticleStore, OrderStore, SaveOptions};
