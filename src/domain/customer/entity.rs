use std::fmt;

// ============================================================================
// Customer Entity + Address Value Object
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CustomerError {
    #[error("id is required")]
    MissingId,

    #[error("Name is required")]
    MissingName,

    #[error("Address is mandatory to activate a customer")]
    MissingAddress,
}

/// Mailing address value object.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub zip: String,
    pub city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.number, self.zip, self.city
        )
    }
}

/// Customer value holder. Orders reference it by id only.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u32,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(CustomerError::MissingId);
        }
        if name.trim().is_empty() {
            return Err(CustomerError::MissingName);
        }

        Ok(Self {
            id,
            name,
            address: None,
            active: false,
            reward_points: 0,
        })
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::MissingName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activation requires a mailing address on file.
    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::MissingAddress);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u32) {
        self.reward_points += points;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u32 {
        self.reward_points
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new("Cs1", "Customer One").unwrap();

        assert_eq!(customer.id(), "Cs1");
        assert_eq!(customer.name(), "Customer One");
        assert!(!customer.is_active());
        assert_eq!(customer.reward_points(), 0);
    }

    #[test]
    fn test_customer_rejects_blank_identifiers() {
        assert_eq!(
            Customer::new("", "Customer One").unwrap_err(),
            CustomerError::MissingId
        );
        assert_eq!(
            Customer::new("Cs1", " ").unwrap_err(),
            CustomerError::MissingName
        );
    }

    #[test]
    fn test_activation_requires_address() {
        let mut customer = Customer::new("Cs1", "Customer One").unwrap();

        assert_eq!(customer.activate().unwrap_err(), CustomerError::MissingAddress);

        customer.change_address(Address::new("Street 1", 1, "Zipcode 1", "City 1"));
        customer.activate().unwrap();
        assert!(customer.is_active());

        customer.deactivate();
        assert!(!customer.is_active());
    }

    #[test]
    fn test_reward_points_accumulate() {
        let mut customer = Customer::new("Cs1", "Customer One").unwrap();

        customer.add_reward_points(10);
        customer.add_reward_points(15);

        assert_eq!(customer.reward_points(), 25);
    }

    #[test]
    fn test_address_display() {
        let address = Address::new("Street 1", 1, "Zipcode 1", "City 1");
        assert_eq!(address.to_string(), "Street 1, 1, Zipcode 1 City 1");
    }
}
