//! Order-management domain core.
//!
//! The heart of this crate is the `Order` aggregate (an order root owning its
//! `OrderItem` collection) and the repository layer that maps the aggregate to
//! and from a relational store while preserving its invariants: derived total,
//! nested-collection integrity, identity stability.
//!
//! Layering follows the usual split:
//! - `domain` — entities, validation rules, the repository contract, and the
//!   event dispatcher consumed by the customer aggregate.
//! - `infrastructure` — row shapes, the storage-model boundary, and the
//!   concrete adapters (Postgres via sqlx, plus an in-memory fake for tests).

pub mod domain;
pub mod infrastructure;

pub use domain::events::{Event, EventDispatcher, EventHandler};
pub use domain::order::{Order, OrderError, OrderItem, OrderRepository, RepositoryError};
pub use infrastructure::order::{
    MemoryOrderStore, OrderItemRow, OrderRow, OrderStore, PgOrderStore, StoreOrderRepository,
};
