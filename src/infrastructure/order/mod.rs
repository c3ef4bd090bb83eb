// ============================================================================
// Order Persistence - Storage Boundary + Adapters
// ============================================================================
//
// - `store`: the row shapes and the minimal capability set the mapping layer
//   needs from any storage engine.
// - `repository`: `StoreOrderRepository`, the mapping between the Order
//   aggregate and its rows, generic over the store.
// - `memory`: in-memory fake store, the test double for the whole layer.
// - `postgres`: sqlx adapter against the real relational schema.
//
// ============================================================================

pub mod memory;
pub mod postgres;
pub mod repository;
pub mod store;

pub use memory::MemoryOrderStore;
pub use postgres::PgOrderStore;
pub use repository::StoreOrderRepository;
pub use store::{OrderItemRow, OrderRow, OrderStore};
