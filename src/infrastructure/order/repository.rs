use async_trait::async_trait;

use crate::domain::order::{Order, OrderItem, OrderRepository, RepositoryError};

use super::store::{OrderItemRow, OrderRow, OrderStore};

// ============================================================================
// Order Repository - Aggregate <-> Row Mapping
// ============================================================================
//
// Implements the domain repository contract over any `OrderStore`. This is
// where the aggregate boundary is reconciled with a store that has no notion
// of it: the root row carries the derived total as a column, every child row
// is stamped with the root id, and reconstruction re-runs entity validation
// so a loaded aggregate satisfies the same invariants as a built one.
//
// ============================================================================

pub struct StoreOrderRepository<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> StoreOrderRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn to_rows(order: &Order) -> (OrderRow, Vec<OrderItemRow>) {
        let root = OrderRow {
            id: order.id().to_string(),
            customer_id: order.customer_id().to_string(),
            total: order.total(),
        };

        let items = order
            .items()
            .iter()
            .map(|item| OrderItemRow {
                id: item.id().to_string(),
                name: item.name().to_string(),
                price: item.price(),
                quantity: item.quantity(),
                order_id: order.id().to_string(),
                product_id: item.product_id().to_string(),
            })
            .collect();

        (root, items)
    }

    fn from_rows(root: OrderRow, items: Vec<OrderItemRow>) -> Result<Order, RepositoryError> {
        let mut rebuilt = Vec::with_capacity(items.len());
        for row in items {
            rebuilt.push(OrderItem::new(
                row.id,
                row.name,
                row.price,
                row.product_id,
                row.quantity,
            )?);
        }

        Ok(Order::new(root.id, root.customer_id, rebuilt)?)
    }
}

#[async_trait]
impl<S: OrderStore> OrderRepository for StoreOrderRepository<S> {
    async fn create(&self, order: &Order) -> Result<(), RepositoryError> {
        let (root, items) = Self::to_rows(order);
        let item_count = items.len();

        self.store
            .insert_with_items(root, items)
            .await
            .map_err(RepositoryError::Storage)?;

        tracing::info!(
            order_id = %order.id(),
            customer_id = %order.customer_id(),
            item_count,
            total = order.total(),
            "order persisted"
        );
        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<(), RepositoryError> {
        let (root, items) = Self::to_rows(order);

        // Upsert-by-identity over the existing item-id set. Item rows whose
        // ids are gone from the in-memory collection are left in place.
        self.store
            .update_order(root)
            .await
            .map_err(RepositoryError::Storage)?;

        for item in items {
            self.store
                .update_item(item)
                .await
                .map_err(RepositoryError::Storage)?;
        }

        tracing::info!(
            order_id = %order.id(),
            total = order.total(),
            "order updated"
        );
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Order, RepositoryError> {
        let fetched = self
            .store
            .fetch(id)
            .await
            .map_err(RepositoryError::Storage)?;

        match fetched {
            Some((root, items)) => Self::from_rows(root, items),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let fetched = self
            .store
            .fetch_all()
            .await
            .map_err(RepositoryError::Storage)?;

        let mut orders = Vec::with_capacity(fetched.len());
        for (root, items) in fetched {
            orders.push(Self::from_rows(root, items)?);
        }

        Ok(orders)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
