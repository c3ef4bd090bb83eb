use crate::domain::events::Event;

use super::entity::Customer;

// ============================================================================
// Customer Domain Events
// ============================================================================

/// Events raised by the customer aggregate. The payload is the aggregate
/// itself, snapshotted at the moment the event was raised.
///
/// The names stay compatible with the registry keys the existing handlers
/// subscribe under.
#[derive(Debug, Clone)]
pub enum CustomerEvent {
    Created(Customer),
    AddressChanged(Customer),
}

impl CustomerEvent {
    pub fn event_data(&self) -> &Customer {
        match self {
            Self::Created(customer) | Self::AddressChanged(customer) => customer,
        }
    }
}

impl Event for CustomerEvent {
    fn event_name(&self) -> &str {
        match self {
            Self::Created(_) => "CustomerCreatedEvent",
            Self::AddressChanged(_) => "CustomerUpdatedEvent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let customer = Customer::new("Cs1", "Customer One").unwrap();

        assert_eq!(
            CustomerEvent::Created(customer.clone()).event_name(),
            "CustomerCreatedEvent"
        );
        assert_eq!(
            CustomerEvent::AddressChanged(customer).event_name(),
            "CustomerUpdatedEvent"
        );
    }

    #[test]
    fn test_event_data_carries_the_aggregate() {
        let customer = Customer::new("Cs1", "Customer One").unwrap();
        let event = CustomerEvent::Created(customer.clone());

        assert_eq!(event.event_data(), &customer);
    }
}
