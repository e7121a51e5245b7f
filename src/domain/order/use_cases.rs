use super::aggregate::Order;
use super::commands::{OrderApprovalRequest, OrderShipmentRequest};
use super::errors::OrderApprovalError;
use crate::repository::OrderRepository;
use crate::shipment::ShipmentService;

// ============================================================================
// Order Use Cases
// ============================================================================
//
// Orchestrates: Request → Repository fetch → Order transition → Repository save
//
// Save is reached only when the transition succeeded, so a rejected
// transition never leaves a trace in the repository.
//
// ============================================================================

pub struct OrderApprovalUseCase<R: OrderRepository> {
    repository: R,
}

impl<R: OrderRepository> OrderApprovalUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Approve or reject the requested order and persist the result
    pub fn run(&mut self, request: OrderApprovalRequest) -> Result<Order, OrderApprovalError> {
        let mut order = self.repository.find_by_id(request.order_id)?;

        let outcome = if request.approve {
            order.approve()
        } else {
            order.reject()
        };

        if let Err(e) = outcome {
            tracing::warn!(
                order_id = request.order_id,
                approve = request.approve,
                status = %order.status(),
                error = %e,
                "Order approval refused"
            );
            return Err(e.into());
        }

        self.repository.save(order.clone())?;

        tracing::info!(
            order_id = order.id(),
            status = %order.status(),
            "Order approval persisted"
        );

        Ok(order)
    }
}

pub struct OrderShipmentUseCase<R: OrderRepository, S: ShipmentService> {
    repository: R,
    shipment_service: S,
}

impl<R: OrderRepository, S: ShipmentService> OrderShipmentUseCase<R, S> {
    pub fn new(repository: R, shipment_service: S) -> Self {
        Self {
            repository,
            shipment_service,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn shipment_service(&self) -> &S {
        &self.shipment_service
    }

    pub fn into_parts(self) -> (R, S) {
        (self.repository, self.shipment_service)
    }

    /// Ship the requested order and persist the result
    pub fn run(&mut self, request: OrderShipmentRequest) -> Result<Order, OrderApprovalError> {
        let mut order = self.repository.find_by_id(request.order_id)?;

        if let Err(e) = order.ship(&mut self.shipment_service) {
            tracing::warn!(
                order_id = request.order_id,
                status = %order.status(),
                error = %e,
                "Order shipment refused"
            );
            return Err(e.into());
        }

        self.repository.save(order.clone())?;

        tracing::info!(order_id = order.id(), "Order shipped");

        Ok(order)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
