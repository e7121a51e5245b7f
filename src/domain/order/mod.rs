// ============================================================================
// Order Domain - Approval state machine and its use cases
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderId, OrderStatus)
// - Requests (OrderApprovalRequest, OrderShipmentRequest)
// - Errors (OrderError, OrderApprovalError)
// - Entity (Order with its transition guards)
// - Use cases (OrderApprovalUseCase, OrderShipmentUseCase)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod use_cases;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use use_cases::*;
