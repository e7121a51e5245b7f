use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Identifier assigned to an order by the repository when it is created
pub type OrderId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Approved,
    Rejected,
    Shipped,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::Rejected => "REJECTED",
            OrderStatus::Shipped => "SHIPPED",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
