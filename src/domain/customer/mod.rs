// ============================================================================
// Customer Domain - Value Holder + Domain Events
// ============================================================================
//
// The customer is a simple value holder consumed by reference from the order
// aggregate (orders carry a customer_id, never the customer itself). It is
// also the one aggregate wired into the event dispatcher: creation and
// address changes raise events consumed by the logging handlers.
//
// ============================================================================

pub mod entity;
pub mod events;
pub mod handlers;

pub use entity::{Address, Customer, CustomerError};
pub use events::CustomerEvent;
pub use handlers::{
    LogsWhenCustomerAddressChanges, LogsWhenCustomerIsCreated, SendsWelcomeLogWhenCustomerIsCreated,
};
