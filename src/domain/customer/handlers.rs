use crate::domain::events::EventHandler;

use super::events::CustomerEvent;

// ============================================================================
// Customer Event Handlers
// ============================================================================
//
// Logging subscribers for customer events. Two distinct handlers listen for
// creation (they log different lines), one for address changes.
//
// ============================================================================

pub struct LogsWhenCustomerIsCreated;

impl EventHandler<CustomerEvent> for LogsWhenCustomerIsCreated {
    fn handle(&self, event: &CustomerEvent) {
        let customer = event.event_data();
        tracing::info!(
            customer_id = %customer.id(),
            "customer created"
        );
    }
}

pub struct SendsWelcomeLogWhenCustomerIsCreated;

impl EventHandler<CustomerEvent> for SendsWelcomeLogWhenCustomerIsCreated {
    fn handle(&self, event: &CustomerEvent) {
        let customer = event.event_data();
        tracing::info!(
            customer_id = %customer.id(),
            customer_name = %customer.name(),
            "welcome aboard"
        );
    }
}

pub struct LogsWhenCustomerAddressChanges;

impl EventHandler<CustomerEvent> for LogsWhenCustomerAddressChanges {
    fn handle(&self, event: &CustomerEvent) {
        let customer = event.event_data();
        let address = customer
            .address()
            .map(ToString::to_string)
            .unwrap_or_else(|| "<none>".to_string());
        tracing::info!(
            customer_id = %customer.id(),
            customer_name = %customer.name(),
            address = %address,
            "customer address changed"
        );
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::entity::{Address, Customer};
    use crate::domain::events::EventDispatcher;
    use std::sync::Arc;

    #[test]
    fn test_created_handlers_registered_in_order() {
        let mut dispatcher: EventDispatcher<CustomerEvent> = EventDispatcher::new();
        let first: Arc<dyn EventHandler<CustomerEvent>> = Arc::new(LogsWhenCustomerIsCreated);
        let second: Arc<dyn EventHandler<CustomerEvent>> =
            Arc::new(SendsWelcomeLogWhenCustomerIsCreated);

        dispatcher.register("CustomerCreatedEvent", first.clone());
        dispatcher.register("CustomerCreatedEvent", second.clone());

        let registered = dispatcher.handlers("CustomerCreatedEvent");
        assert_eq!(registered.len(), 2);
        assert!(Arc::ptr_eq(&registered[0], &first));
        assert!(Arc::ptr_eq(&registered[1], &second));
    }

    #[test]
    fn test_notify_created_event_reaches_both_handlers() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("checkout_core=debug")
            .with_test_writer()
            .try_init();

        let mut dispatcher: EventDispatcher<CustomerEvent> = EventDispatcher::new();
        dispatcher.register("CustomerCreatedEvent", Arc::new(LogsWhenCustomerIsCreated));
        dispatcher.register(
            "CustomerCreatedEvent",
            Arc::new(SendsWelcomeLogWhenCustomerIsCreated),
        );

        let customer = Customer::new("Cs1", "Customer One").unwrap();
        dispatcher.notify(&CustomerEvent::Created(customer));
    }

    #[test]
    fn test_notify_address_change_reaches_update_handler() {
        let mut dispatcher: EventDispatcher<CustomerEvent> = EventDispatcher::new();
        dispatcher.register(
            "CustomerUpdatedEvent",
            Arc::new(LogsWhenCustomerAddressChanges),
        );

        let mut customer = Customer::new("Cs1", "Customer One").unwrap();
        customer.change_address(Address::new("St1", 1, "Zi1", "Ci1"));

        dispatcher.notify(&CustomerEvent::AddressChanged(customer));
    }
}
