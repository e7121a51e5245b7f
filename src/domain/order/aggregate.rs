use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::value_objects::{OrderId, OrderStatus};
use crate::shipment::ShipmentService;

// ============================================================================
// Order Entity - Status State Machine
// ============================================================================
//
// CREATED ──approve──▶ APPROVED ──ship──▶ SHIPPED
//    │
//    └─────reject────▶ REJECTED
//
// SHIPPED is final: every transition out of it fails before any other guard.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    status: OrderStatus,
}

impl Order {
    pub fn new(id: OrderId, status: OrderStatus) -> Self {
        Self { id, status }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Approve the order. Approving an already approved order is a no-op.
    pub fn approve(&mut self) -> Result<(), OrderError> {
        self.assert_not_shipped()?;

        if self.is_rejected() {
            return Err(OrderError::RejectedOrderCannotBeApproved);
        }

        self.transition_to(OrderStatus::Approved);
        Ok(())
    }

    /// Reject the order. Rejecting an already rejected order is a no-op.
    pub fn reject(&mut self) -> Result<(), OrderError> {
        self.assert_not_shipped()?;

        if self.is_approved() {
            return Err(OrderError::ApprovedOrderCannotBeRejected);
        }

        self.transition_to(OrderStatus::Rejected);
        Ok(())
    }

    /// Hand the order to the shipment service and mark it shipped.
    ///
    /// Only approved orders can be shipped. If the service fails the order
    /// stays approved.
    pub fn ship<S>(&mut self, shipment_service: &mut S) -> Result<(), OrderError>
    where
        S: ShipmentService + ?Sized,
    {
        match self.status {
            OrderStatus::Approved => {}
            OrderStatus::Shipped => return Err(OrderError::OrderAlreadyShipped),
            OrderStatus::Created | OrderStatus::Rejected => {
                return Err(OrderError::OrderNotShippable(self.status))
            }
        }

        shipment_service
            .ship(self)
            .map_err(|e| OrderError::ShipmentFailed(format!("{:#}", e)))?;

        self.transition_to(OrderStatus::Shipped);
        Ok(())
    }

    pub fn is_created(&self) -> bool {
        self.status == OrderStatus::Created
    }

    pub fn is_approved(&self) -> bool {
        self.status == OrderStatus::Approved
    }

    pub fn is_rejected(&self) -> bool {
        self.status == OrderStatus::Rejected
    }

    pub fn is_shipped(&self) -> bool {
        self.status == OrderStatus::Shipped
    }

    fn assert_not_shipped(&self) -> Result<(), OrderError> {
        if self.is_shipped() {
            return Err(OrderError::ShippedOrdersCannotBeChanged);
        }
        Ok(())
    }

    fn transition_to(&mut self, next: OrderStatus) {
        tracing::debug!(
            order_id = self.id,
            from = %self.status,
            to = %next,
            "Order status transition"
        );
        self.status = next;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipment::RecordingShipmentService;

    fn order_in(status: OrderStatus) -> Order {
        Order::new(1, status)
    }

    #[test]
    fn test_new_order_keeps_identity_and_status() {
        let order = Order::new(42, OrderStatus::Created);
        assert_eq!(order.id(), 42);
        assert_eq!(order.status(), OrderStatus::Created);
        assert!(order.is_created());
    }

    #[test]
    fn test_approve_created_order() {
        let mut order = order_in(OrderStatus::Created);
        order.approve().unwrap();
        assert_eq!(order.status(), OrderStatus::Approved);
    }

    #[test]
    fn test_reject_created_order() {
        let mut order = order_in(OrderStatus::Created);
        order.reject().unwrap();
        assert_eq!(order.status(), OrderStatus::Rejected);
    }

    #[test]
    fn test_approve_is_idempotent() {
        let mut order = order_in(OrderStatus::Approved);
        order.approve().unwrap();
        assert!(order.is_approved());
    }

    #[test]
    fn test_reject_is_idempotent() {
        let mut order = order_in(OrderStatus::Rejected);
        order.reject().unwrap();
        assert!(order.is_rejected());
    }

    #[test]
    fn test_cannot_approve_rejected_order() {
        let mut order = order_in(OrderStatus::Rejected);

        let result = order.approve();
        assert!(matches!(result.unwrap_err(), OrderError::RejectedOrderCannotBeApproved));
        assert_eq!(order.status(), OrderStatus::Rejected);
    }

    #[test]
    fn test_cannot_reject_approved_order() {
        let mut order = order_in(OrderStatus::Approved);

        let result = order.reject();
        assert!(matches!(result.unwrap_err(), OrderError::ApprovedOrderCannotBeRejected));
        assert_eq!(order.status(), OrderStatus::Approved);
    }

    #[test]
    fn test_shipped_order_cannot_be_changed() {
        let mut order = order_in(OrderStatus::Shipped);

        assert!(matches!(order.approve().unwrap_err(), OrderError::ShippedOrdersCannotBeChanged));
        assert!(matches!(order.reject().unwrap_err(), OrderError::ShippedOrdersCannotBeChanged));
        assert_eq!(order.status(), OrderStatus::Shipped);
    }

    #[test]
    fn test_ship_approved_order() {
        let mut order = order_in(OrderStatus::Approved);
        let mut shipment = RecordingShipmentService::default();

        order.ship(&mut shipment).unwrap();

        assert!(order.is_shipped());
        assert_eq!(shipment.shipped_ids(), &[1]);
    }

    #[test]
    fn test_cannot_ship_created_or_rejected_order() {
        let mut shipment = RecordingShipmentService::default();

        for status in [OrderStatus::Created, OrderStatus::Rejected] {
            let mut order = order_in(status);
            let result = order.ship(&mut shipment);
            assert_eq!(result.unwrap_err(), OrderError::OrderNotShippable(status));
            assert_eq!(order.status(), status);
        }

        assert!(shipment.shipped_ids().is_empty());
    }

    #[test]
    fn test_cannot_ship_twice() {
        let mut order = order_in(OrderStatus::Shipped);
        let mut shipment = RecordingShipmentService::default();

        let result = order.ship(&mut shipment);
        assert!(matches!(result.unwrap_err(), OrderError::OrderAlreadyShipped));
        assert!(shipment.shipped_ids().is_empty());
    }

    #[test]
    fn test_failed_shipment_keeps_order_approved() {
        let mut order = order_in(OrderStatus::Approved);
        let mut shipment = RecordingShipmentService::failing("carrier offline");

        let result = order.ship(&mut shipment);
        assert!(matches!(result.unwrap_err(), OrderError::ShipmentFailed(msg) if msg.contains("carrier offline")));
        assert!(order.is_approved());
    }

    #[test]
    fn test_order_serialization() {
        let order = Order::new(3, OrderStatus::Approved);

        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"{"id":3,"status":"APPROVED"}"#);

        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, order);
    }
}
