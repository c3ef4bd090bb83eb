// ============================================================================
// Product Domain - Value Holder
// ============================================================================

pub mod entity;

pub use entity::{Product, ProductError};
