use async_trait::async_trait;

use super::entity::Order;
use super::errors::OrderError;

// ============================================================================
// Order Repository Contract
// ============================================================================
//
// The abstract interface the rest of the system programs against. Concrete
// adapters (Postgres, in-memory fake) live under `infrastructure::order` and
// are injected wherever a repository is needed, so the aggregate invariants
// can be tested without a real storage engine.
//
// ============================================================================

/// Failures surfaced by repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No root row matches the requested id. "Does not exist", not a
    /// transient fault.
    #[error("Order not found")]
    NotFound,

    /// Stored rows no longer satisfy the aggregate invariants, caught while
    /// reconstructing the entity on load.
    #[error(transparent)]
    Validation(#[from] OrderError),

    /// Underlying store failure (constraint violation, connectivity),
    /// propagated unmodified. Never retried here: a retry could duplicate a
    /// non-idempotent insert.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Maps `Order` aggregates to and from durable storage, preserving the
/// root/children relationship.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new root row and, in the same unit of work, one child row
    /// per item, each stamped with the order's id as a foreign key. Must not
    /// leave partially-written children when the root write fails.
    async fn create(&self, order: &Order) -> Result<(), RepositoryError>;

    /// Rewrites the root row's mutable fields (customer_id, total) and every
    /// item row, matching by identity. This is an upsert over the existing
    /// item-id set: item rows whose ids vanished from the in-memory
    /// collection are NOT deleted. An unknown order id is a silent no-op, so
    /// callers must not rely on update to signal "not found".
    async fn update(&self, order: &Order) -> Result<(), RepositoryError>;

    /// Loads the root row with its item rows eagerly joined and reconstructs
    /// the aggregate, children in stored order. `NotFound` when no root row
    /// matches.
    async fn find(&self, id: &str) -> Result<Order, RepositoryError>;

    /// Loads every root row with its children; ordering follows the
    /// underlying storage scan order.
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
}
