// ============================================================================
// Order Domain - Order Aggregate
// ============================================================================
//
// Everything Order-specific lives here:
// - Entities (Order aggregate root, OrderItem child entity)
// - Errors (OrderError validation enum)
// - Repository contract (OrderRepository trait, RepositoryError)
//
// The concrete storage adapters live under `infrastructure::order`.
//
// ============================================================================

pub mod entity;
pub mod errors;
pub mod repository;

pub use entity::{Order, OrderItem};
pub use errors::OrderError;
pub use repository::{OrderRepository, RepositoryError};
