use super::errors::OrderError;

// ============================================================================
// Order Aggregate - Entities
// ============================================================================
//
// Order is the aggregate root; it exclusively owns its OrderItem collection.
// All access to an item goes through the order, so the cross-entity
// invariants (non-empty collection, unique item ids) hold at every point an
// outside caller can observe.
//
// ============================================================================

/// One purchased line: a product reference with a price snapshot taken at
/// time of sale.
///
/// `id`, `name`, `price` and `product_id` are fixed at construction;
/// `update_quantity` is the only mutation path.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: i32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: i32,
    ) -> Result<Self, OrderError> {
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        if price < 0.0 {
            return Err(OrderError::NegativePrice(price));
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        })
    }

    /// Replaces the quantity. Rejects non-positive values and leaves the
    /// current quantity untouched on failure.
    pub fn update_quantity(&mut self, quantity: i32) -> Result<(), OrderError> {
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        self.quantity = quantity;
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

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Aggregate root for a customer order.
///
/// Identity (`id`) never changes after construction. The item collection is
/// ordered, non-empty, and item ids are unique within the order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let id = id.into();
        let customer_id = customer_id.into();

        if id.trim().is_empty() {
            return Err(OrderError::MissingId);
        }
        if customer_id.trim().is_empty() {
            return Err(OrderError::MissingCustomerId);
        }

        let mut order = Self {
            id,
            customer_id,
            items: Vec::new(),
        };
        order.replace_items(items)?;

        Ok(order)
    }

    /// Sum of item subtotals, recomputed on every call. Never cached, so it
    /// cannot desynchronize from the item list.
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Appends an item, enforcing id uniqueness within the order.
    pub fn add_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        if self.items.iter().any(|existing| existing.id == item.id) {
            return Err(OrderError::DuplicateItemId(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// Swaps in a whole new item collection. The non-empty and unique-id
    /// invariants are checked before anything is replaced.
    pub fn replace_items(&mut self, items: Vec<OrderItem>) -> Result<(), OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|earlier| earlier.id == item.id) {
                return Err(OrderError::DuplicateItemId(item.id.clone()));
            }
        }
        self.items = items;
        Ok(())
    }

    /// Mutable access to one owned item, for `update_quantity`.
    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut OrderItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
