// ============================================================================
// Shared Event Infrastructure
// ============================================================================
//
// Publish/subscribe plumbing for domain events: a registry mapping an
// event-name string to an ordered list of handlers. Aggregate-specific event
// types and handlers live with their aggregate (see `domain::customer`).
//
// ============================================================================

pub mod dispatcher;

pub use dispatcher::{Event, EventDispatcher, EventHandler};
