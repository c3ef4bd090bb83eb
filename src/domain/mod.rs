// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// One subdirectory per aggregate. The order aggregate carries the real
// invariants (non-empty item collection, derived total, unique item ids);
// customer and product are simple value holders consumed by reference.
// `events` holds the shared dispatcher used by the customer event handlers.
//
// ============================================================================

pub mod customer;
pub mod events;
pub mod order;
pub mod product;
