use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ============================================================================
// Storage Model Boundary
// ============================================================================
//
// The row shapes below mirror the persisted schema field for field; they are
// the interchange format between the mapping layer and every store. The
// `OrderStore` trait is the exact capability set the mapping layer needs:
// atomic root+children insert, per-row update by primary key, and eager-join
// reads. Nothing engine-specific leaks through it.
//
// ============================================================================

/// Root row of the order table: `{id, customer_id, total}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderRow {
    pub id: String,
    pub customer_id: String,
    pub total: f64,
}

/// Child row of the order-item table:
/// `{id, name, price, quantity, order_id, product_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItemRow {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub order_id: String,
    pub product_id: String,
}

/// Minimal storage capabilities the order mapping layer depends on.
///
/// Errors are engine failures (constraint violations, connectivity); absence
/// of a row is never an error at this boundary.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Inserts the root row and all child rows as one atomic unit. A
    /// duplicate root id is a store failure, and no children may remain
    /// written when the root write fails.
    async fn insert_with_items(
        &self,
        order: OrderRow,
        items: Vec<OrderItemRow>,
    ) -> anyhow::Result<()>;

    /// Rewrites the root row matching `order.id`. No-op when absent.
    async fn update_order(&self, order: OrderRow) -> anyhow::Result<()>;

    /// Rewrites the child row matching `item.id`. No-op when absent.
    async fn update_item(&self, item: OrderItemRow) -> anyhow::Result<()>;

    /// The root row with its children eagerly joined, children in stored
    /// sequence order. `None` when no root row matches.
    async fn fetch(&self, id: &str) -> anyhow::Result<Option<(OrderRow, Vec<OrderItemRow>)>>;

    /// Every root row with its children, in storage scan order.
    async fn fetch_all(&self) -> anyhow::Result<Vec<(OrderRow, Vec<OrderItemRow>)>>;
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // The serialized shapes interoperate with the existing persisted schema,
    // so the field-name sets are pinned here.
    #[test]
    fn test_order_row_field_names() {
        let row = OrderRow {
            id: "Or1".to_string(),
            customer_id: "Cs1".to_string(),
            total: 60.0,
        };

        let value = serde_json::to_value(&row).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(keys, vec!["customer_id", "id", "total"]);
    }

    #[test]
    fn test_order_item_row_field_names() {
        let row = OrderItemRow {
            id: "Oi1".to_string(),
            name: "Product 1".to_string(),
            price: 10.0,
            quantity: 2,
            order_id: "Or1".to_string(),
            product_id: "Pr1".to_string(),
        };

        let value = serde_json::to_value(&row).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec!["id", "name", "order_id", "price", "product_id", "quantity"]
        );
    }

    #[test]
    fn test_rows_round_trip_through_json() {
        let row = OrderItemRow {
            id: "Oi1".to_string(),
            name: "Product 1".to_string(),
            price: 10.0,
            quantity: 2,
            order_id: "Or1".to_string(),
            product_id: "Pr1".to_string(),
        };

        let json = serde_json::to_string(&row).unwrap();
        let back: OrderItemRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }
}
