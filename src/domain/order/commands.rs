use super::value_objects::OrderId;

// ============================================================================
// Order Requests - Represent user intent
// ============================================================================

/// Approve (`approve == true`) or reject (`approve == false`) an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderApprovalRequest {
    pub order_id: OrderId,
    pub approve: bool,
}

impl OrderApprovalRequest {
    pub fn new(order_id: OrderId, approve: bool) -> Self {
        Self { order_id, approve }
    }

    pub fn approve(order_id: OrderId) -> Self {
        Self::new(order_id, true)
    }

    pub fn reject(order_id: OrderId) -> Self {
        Self::new(order_id, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderShipmentRequest {
    pub order_id: OrderId,
}

impl OrderShipmentRequest {
    pub fn new(order_id: OrderId) -> Self {
        Self { order_id }
    }
}
