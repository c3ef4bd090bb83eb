// ============================================================================
// Infrastructure Layer - Storage Adapters
// ============================================================================
//
// Row shapes, the storage-model boundary trait, and the concrete stores the
// domain repository contract is implemented against.
//
// ============================================================================

pub mod order;
