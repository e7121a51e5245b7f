use anyhow::{bail, Result};

use crate::domain::order::{Order, OrderId};

// ============================================================================
// Shipment Service - Collaborator invoked when an order ships
// ============================================================================

pub trait ShipmentService {
    fn ship(&mut self, order: &Order) -> Result<()>;
}

/// Records every shipped order id. Can be configured to fail every call.
#[derive(Debug, Default)]
pub struct RecordingShipmentService {
    shipped: Vec<OrderId>,
    failure: Option<String>,
}

impl RecordingShipmentService {
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            shipped: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    pub fn shipped_ids(&self) -> &[OrderId] {
        &self.shipped
    }
}

impl ShipmentService for RecordingShipmentService {
    fn ship(&mut self, order: &Order) -> Result<()> {
        if let Some(reason) = &self.failure {
            bail!("cannot ship order {}: {}", order.id(), reason);
        }

        tracing::info!(order_id = order.id(), "Shipment dispatched");
        self.shipped.push(order.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;

    #[test]
    fn test_records_shipped_orders() {
        let mut service = RecordingShipmentService::default();

        service.ship(&Order::new(1, OrderStatus::Approved)).unwrap();
        service.ship(&Order::new(2, OrderStatus::Approved)).unwrap();

        assert_eq!(service.shipped_ids(), &[1, 2]);
    }

    #[test]
    fn test_failing_service_records_nothing() {
        let mut service = RecordingShipmentService::failing("carrier offline");

        let err = service.ship(&Order::new(1, OrderStatus::Approved)).unwrap_err();

        assert_eq!(err.to_string(), "cannot ship order 1: carrier offline");
        assert!(service.shipped_ids().is_empty());
    }
}
