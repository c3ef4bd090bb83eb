use async_trait::async_trait;
use tokio::sync::RwLock;

use anyhow::bail;

use super::store::{OrderItemRow, OrderRow, OrderStore};

// ============================================================================
// In-Memory Order Store
// ============================================================================
//
// Fake storage engine used to exercise the mapping layer without a database.
// Rows live in insertion-ordered Vecs, so scan order is insertion order.
// Each operation runs under a single write-lock section, which gives the
// root+children insert the atomicity the contract requires.
//
// ============================================================================

#[derive(Default)]
struct MemoryState {
    orders: Vec<OrderRow>,
    items: Vec<OrderItemRow>,
}

#[derive(Default)]
pub struct MemoryOrderStore {
    state: RwLock<MemoryState>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert_with_items(
        &self,
        order: OrderRow,
        items: Vec<OrderItemRow>,
    ) -> anyhow::Result<()> {
        let mut state = self.state.write().await;

        // Models the relational primary-key constraint.
        if state.orders.iter().any(|row| row.id == order.id) {
            bail!("duplicate order id: {}", order.id);
        }

        state.orders.push(order);
        state.items.extend(items);
        Ok(())
    }

    async fn update_order(&self, order: OrderRow) -> anyhow::Result<()> {
        let mut state = self.state.write().await;
        if let Some(row) = state.orders.iter_mut().find(|row| row.id == order.id) {
            *row = order;
        }
        Ok(())
    }

    async fn update_item(&self, item: OrderItemRow) -> anyhow::Result<()> {
        let mut state = self.state.write().await;
        if let Some(row) = state.items.iter_mut().find(|row| row.id == item.id) {
            *row = item;
        }
        Ok(())
    }

    async fn fetch(&self, id: &str) -> anyhow::Result<Option<(OrderRow, Vec<OrderItemRow>)>> {
        let state = self.state.read().await;

        let Some(order) = state.orders.iter().find(|row| row.id == id).cloned() else {
            return Ok(None);
        };

        let items = state
            .items
            .iter()
            .filter(|row| row.order_id == id)
            .cloned()
            .collect();

        Ok(Some((order, items)))
    }

    async fn fetch_all(&self) -> anyhow::Result<Vec<(OrderRow, Vec<OrderItemRow>)>> {
        let state = self.state.read().await;

        let result = state
            .orders
            .iter()
            .map(|order| {
                let items = state
                    .items
                    .iter()
                    .filter(|row| row.order_id == order.id)
                    .cloned()
                    .collect();
                (order.clone(), items)
            })
            .collect();

        Ok(result)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn order_row(id: &str) -> OrderRow {
        OrderRow {
            id: id.to_string(),
            customer_id: "Cs1".to_string(),
            total: 20.0,
        }
    }

    fn item_row(id: &str, order_id: &str) -> OrderItemRow {
        OrderItemRow {
            id: id.to_string(),
            name: "Product 1".to_string(),
            price: 10.0,
            quantity: 2,
            order_id: order_id.to_string(),
            product_id: "Pr1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let store = MemoryOrderStore::new();
        store
            .insert_with_items(order_row("Or1"), vec![item_row("Oi1", "Or1")])
            .await
            .unwrap();

        let (order, items) = store.fetch("Or1").await.unwrap().unwrap();
        assert_eq!(order.id, "Or1");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "Oi1");
    }

    #[tokio::test]
    async fn test_duplicate_insert_fails() {
        let store = MemoryOrderStore::new();
        store
            .insert_with_items(order_row("Or1"), vec![item_row("Oi1", "Or1")])
            .await
            .unwrap();

        let result = store
            .insert_with_items(order_row("Or1"), vec![item_row("Oi2", "Or1")])
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_is_none() {
        let store = MemoryOrderStore::new();
        assert!(store.fetch("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_rows_is_noop() {
        let store = MemoryOrderStore::new();
        store.update_order(order_row("ghost")).await.unwrap();
        store.update_item(item_row("ghost", "ghost")).await.unwrap();

        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_preserves_insertion_order() {
        let store = MemoryOrderStore::new();
        store
            .insert_with_items(order_row("Or1"), vec![item_row("Oi1", "Or1")])
            .await
            .unwrap();
        store
            .insert_with_items(order_row("Or2"), vec![item_row("Oi2", "Or2")])
            .await
            .unwrap();

        let all = store.fetch_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|(order, _)| order.id.as_str()).collect();
        assert_eq!(ids, vec!["Or1", "Or2"]);
    }
}
