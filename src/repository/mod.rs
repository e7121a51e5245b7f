// ============================================================================
// Order Repository - Persistence Collaborator
// ============================================================================
//
// The use cases depend only on the `OrderRepository` trait. Storage
// mechanics live behind it; `InMemoryOrderRepository` backs the demo and
// doubles as the recording repository in tests.
//
// ============================================================================

pub mod memory;

pub use memory::InMemoryOrderRepository;

use crate::domain::order::{Order, OrderId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),
}

pub trait OrderRepository {
    /// Fetch the current state of an order
    fn find_by_id(&self, id: OrderId) -> Result<Order, RepositoryError>;

    /// Persist an order, replacing any previous state with the same id
    fn save(&mut self, order: Order) -> Result<(), RepositoryError>;
}
