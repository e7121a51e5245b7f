use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_approval::{
    InMemoryOrderRepository, Order, OrderApprovalRequest, OrderApprovalUseCase, OrderRepository,
    OrderShipmentRequest, OrderShipmentUseCase, OrderStatus, RecordingShipmentService,
};

fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_approval=debug")),
        )
        .init();

    tracing::info!("Starting order approval demo");

    // === 1. Seed the in-memory repository ===
    let mut repository = InMemoryOrderRepository::new();
    repository.add_order(Order::new(1, OrderStatus::Created));
    repository.add_order(Order::new(2, OrderStatus::Created));
    repository.add_order(Order::new(3, OrderStatus::Shipped));

    // === 2. Approve and reject ===
    let mut approval = OrderApprovalUseCase::new(repository);

    let approved = approval.run(OrderApprovalRequest::approve(1))?;
    tracing::info!(order_id = approved.id(), status = %approved.status(), "Order approved");

    let rejected = approval.run(OrderApprovalRequest::reject(2))?;
    tracing::info!(order_id = rejected.id(), status = %rejected.status(), "Order rejected");

    // Shipped orders are final; the refusal is a validation error, not a crash
    match approval.run(OrderApprovalRequest::approve(3)) {
        Ok(order) => tracing::warn!(order_id = order.id(), "Shipped order was unexpectedly approved"),
        Err(e) if e.is_business_rule_violation() => {
            tracing::info!(order_id = 3, error = %e, "Approval refused as expected")
        }
        Err(e) => return Err(e.into()),
    }

    // === 3. Ship the approved order ===
    let mut shipment = OrderShipmentUseCase::new(
        approval.into_repository(),
        RecordingShipmentService::default(),
    );
    shipment.run(OrderShipmentRequest::new(1))?;

    // === 4. Final snapshot ===
    let (repository, _) = shipment.into_parts();
    let snapshot = [1, 2, 3]
        .into_iter()
        .map(|id| repository.find_by_id(id))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        saves = repository.save_count(),
        orders = %serde_json::to_string(&snapshot)?,
        "Demo complete"
    );

    Ok(())
}
