use super::value_objects::OrderStatus;
use crate::repository::RepositoryError;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Shipped orders cannot be changed")]
    ShippedOrdersCannotBeChanged,

    #[error("Rejected order cannot be approved")]
    RejectedOrderCannotBeApproved,

    #[error("Approved order cannot be rejected")]
    ApprovedOrderCannotBeRejected,

    #[error("Order is not shippable in status: {0}")]
    OrderNotShippable(OrderStatus),

    #[error("Order is already shipped")]
    OrderAlreadyShipped,

    #[error("Shipment failed: {0}")]
    ShipmentFailed(String),
}

impl OrderError {
    /// Guard violations are validation errors for the caller; retrying will not help.
    pub fn is_business_rule_violation(&self) -> bool {
        !matches!(self, OrderError::ShipmentFailed(_))
    }
}

// ============================================================================
// Use Case Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderApprovalError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl OrderApprovalError {
    pub fn is_business_rule_violation(&self) -> bool {
        match self {
            OrderApprovalError::Order(e) => e.is_business_rule_violation(),
            OrderApprovalError::Repository(_) => false,
        }
    }
}
