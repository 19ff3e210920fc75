use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::order::{NewLineItem, NewOrder, Order, OrderError, OrderLineItem};

use super::OrderStore;

// ============================================================================
// In-Memory Order Store
// ============================================================================
//
// Same contract as the PostgreSQL store, backed by a single mutex. Every
// operation checks all of its preconditions before it mutates anything, so
// a rejected call leaves the state exactly as it was.
//
// ============================================================================

#[derive(Debug)]
struct MemoryState {
    next_order_id: i64,
    next_line_item_id: i64,
    orders: BTreeMap<i64, Order>,
}

impl MemoryState {
    fn order_number_taken(&self, order_number: &str, except: Option<i64>) -> bool {
        self.orders
            .values()
            .any(|o| o.order_number == order_number && Some(o.id) != except)
    }

    fn build_line_items(&mut self, order_id: i64, items: &[NewLineItem]) -> Vec<OrderLineItem> {
        items
            .iter()
            .map(|item| {
                let id = self.next_line_item_id;
                self.next_line_item_id += 1;
                OrderLineItem::from_new(id, order_id, item)
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryOrderStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState {
                next_order_id: 1,
                next_line_item_id: 1,
                orders: BTreeMap::new(),
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, OrderError> {
        self.state
            .lock()
            .map_err(|_| OrderError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), OrderError> {
        self.lock().map(|_| ())
    }

    async fn list(&self) -> Result<Vec<Order>, OrderError> {
        let state = self.lock()?;
        Ok(state.orders.values().cloned().collect())
    }

    async fn get(&self, order_id: i64) -> Result<Order, OrderError> {
        let state = self.lock()?;
        state
            .orders
            .get(&order_id)
            .cloned()
            .ok_or(OrderError::NotFound(order_id))
    }

    async fn create(&self, order: NewOrder) -> Result<Order, OrderError> {
        let mut state = self.lock()?;

        if state.order_number_taken(&order.order_number, None) {
            return Err(OrderError::DuplicateOrderNumber(order.order_number));
        }

        let id = state.next_order_id;
        state.next_order_id += 1;
        let products = state.build_line_items(id, &order.products);

        let created = Order {
            id,
            order_number: order.order_number,
            date: order.date,
            final_price: order.final_price,
            products,
        };
        state.orders.insert(id, created.clone());

        tracing::info!(
            order_id = id,
            order_number = %created.order_number,
            line_item_count = created.products.len(),
            "Created order"
        );

        Ok(created)
    }

    async fn replace(&self, order_id: i64, order: NewOrder) -> Result<Order, OrderError> {
        let mut state = self.lock()?;

        if !state.orders.contains_key(&order_id) {
            return Err(OrderError::NotFound(order_id));
        }
        if state.order_number_taken(&order.order_number, Some(order_id)) {
            return Err(OrderError::DuplicateOrderNumber(order.order_number));
        }

        let products = state.build_line_items(order_id, &order.products);
        let replaced = Order {
            id: order_id,
            order_number: order.order_number,
            date: order.date,
            final_price: order.final_price,
            products,
        };
        state.orders.insert(order_id, replaced.clone());

        tracing::info!(
            order_id,
            order_number = %replaced.order_number,
            line_item_count = replaced.products.len(),
            "Replaced order"
        );

        Ok(replaced)
    }

    async fn delete(&self, order_id: i64) -> Result<(), OrderError> {
        let mut state = self.lock()?;

        let removed = state
            .orders
            .remove(&order_id)
            .ok_or(OrderError::NotFound(order_id))?;

        tracing::info!(
            order_id,
            removed_line_items = removed.products.len(),
            "Deleted order"
        );

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
