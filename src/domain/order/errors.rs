// ============================================================================
// Order Business Rule Errors
// ============================================================================

/// Validation failures raised at construction or mutation time.
///
/// Every variant is recoverable by the caller supplying corrected input; an
/// entity is never left partially constructed or partially updated.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OrderError {
    #[error("id is required")]
    MissingId,

    #[error("customerId is required")]
    MissingCustomerId,

    #[error("Order must have at least one item")]
    EmptyItems,

    #[error("Invalid item quantity: {0}")]
    InvalidQuantity(i32),

    #[error("Invalid item price: {0}")]
    NegativePrice(f64),

    #[error("Duplicate item id: {0}")]
    DuplicateItemId(String),
}
