use std::cell::Cell;
use std::collections::HashMap;

use super::{OrderRepository, RepositoryError};
use crate::domain::order::{Order, OrderId};

// ============================================================================
// In-Memory Order Repository
// ============================================================================
//
// Keeps orders in a HashMap and records every call so callers can assert
// how many fetches and saves a use case performed.
//
// ============================================================================

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: HashMap<OrderId, Order>,
    saved: Vec<Order>,
    fetches: Cell<usize>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an order without counting it as a save
    pub fn add_order(&mut self, order: Order) {
        self.orders.insert(order.id(), order);
    }

    /// Most recently saved order, if any save happened
    pub fn saved_order(&self) -> Option<&Order> {
        self.saved.last()
    }

    pub fn saved_orders(&self) -> &[Order] {
        &self.saved
    }

    pub fn save_count(&self) -> usize {
        self.saved.len()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn find_by_id(&self, id: OrderId) -> Result<Order, RepositoryError> {
        self.fetches.set(self.fetches.get() + 1);

        let order = self.orders.get(&id).cloned().ok_or(RepositoryError::NotFound(id))?;

        tracing::debug!(order_id = id, status = %order.status(), "Loaded order");
        Ok(order)
    }

    fn save(&mut self, order: Order) -> Result<(), RepositoryError> {
        tracing::debug!(order_id = order.id(), status = %order.status(), "Saving order");

        self.orders.insert(order.id(), order.clone());
        self.saved.push(order);
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
