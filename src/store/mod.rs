// ============================================================================
// Order Aggregate Store
// ============================================================================
//
// Every operation treats an order and its line items as one unit:
// - create inserts the order and all its line items together
// - replace overwrites the scalar fields and swaps the whole line-item set
// - delete removes the line items and then the order
//
// A failure anywhere in the sequence leaves the store unchanged.
//
// ============================================================================

use async_trait::async_trait;

use crate::domain::order::{NewOrder, Order, OrderError};

mod memory;
mod postgres;

pub use memory::InMemoryOrderStore;
pub use postgres::PgOrderStore;

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), OrderError>;

    /// Every order with its line items, ordered by id.
    async fn list(&self) -> Result<Vec<Order>, OrderError>;

    async fn get(&self, order_id: i64) -> Result<Order, OrderError>;

    /// Insert a new order and its line items atomically.
    ///
    /// Fails with `DuplicateOrderNumber` if `order_number` is taken.
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError>;

    /// Overwrite an existing order and fully replace its line items.
    async fn replace(&self, order_id: i64, order: NewOrder) -> Result<Order, OrderError>;

    /// Remove an order together with all of its line items.
    async fn delete(&self, order_id: i64) -> Result<(), OrderError>;
}
