// ============================================================================
// Product Entity
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProductError {
    #[error("id is required")]
    MissingId,

    #[error("Name is required")]
    MissingName,

    #[error("Price must not be negative: {0}")]
    NegativePrice(f64),
}

/// Catalog product. Order items snapshot its name and price at time of sale
/// and keep only the id as a live reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, ProductError> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(ProductError::MissingId);
        }
        if name.trim().is_empty() {
            return Err(ProductError::MissingName);
        }
        if price < 0.0 {
            return Err(ProductError::NegativePrice(price));
        }

        Ok(Self { id, name, price })
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), ProductError> {
        if price < 0.0 {
            return Err(ProductError::NegativePrice(price));
        }
        self.price = price;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("Pr1", "Product 1", 10.0).unwrap();

        assert_eq!(product.id(), "Pr1");
        assert_eq!(product.name(), "Product 1");
        assert_eq!(product.price(), 10.0);
    }

    #[test]
    fn test_product_validation() {
        assert_eq!(
            Product::new("", "Product 1", 10.0).unwrap_err(),
            ProductError::MissingId
        );
        assert_eq!(
            Product::new("Pr1", "", 10.0).unwrap_err(),
            ProductError::MissingName
        );
        assert_eq!(
            Product::new("Pr1", "Product 1", -5.0).unwrap_err(),
            ProductError::NegativePrice(-5.0)
        );
    }

    #[test]
    fn test_change_price() {
        let mut product = Product::new("Pr1", "Product 1", 10.0).unwrap();

        product.change_price(25.0).unwrap();
        assert_eq!(product.price(), 25.0);

        assert_eq!(
            product.change_price(-1.0).unwrap_err(),
            ProductError::NegativePrice(-1.0)
        );
        assert_eq!(product.price(), 25.0);
    }
}
