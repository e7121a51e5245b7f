// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Entities, their guards and the use cases that drive them. Persistence and
// shipping are reached only through the traits in `repository` and
// `shipment`.
//
// ============================================================================

pub mod order;
