pub mod domain;
pub mod repository;
pub mod shipment;

pub use domain::order::{
    Order, OrderApprovalError, OrderApprovalRequest, OrderApprovalUseCase, OrderError, OrderId,
    OrderShipmentRequest, OrderShipmentUseCase, OrderStatus,
};
pub use repository::{InMemoryOrderRepository, OrderRepository, RepositoryError};
pub use shipment::{RecordingShipmentService, ShipmentService};
