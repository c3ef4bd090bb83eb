use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{OrderItemRow, OrderRow, OrderStore};

// ============================================================================
// Postgres Order Store
// ============================================================================
//
// Relational adapter over sqlx. The root+children insert runs inside one
// transaction; updates match by primary key and deliberately ignore the
// affected-row count (an unknown key is a no-op at this boundary). Reads
// carry no ORDER BY: result order is the engine's scan order, which for this
// schema follows insertion.
//
// ============================================================================

pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the order tables when they do not exist yet. The surrounding
    /// infrastructure owns real migrations; this covers test and demo setups.
    pub async fn init_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS orders (
                id TEXT PRIMARY KEY,
                customer_id TEXT NOT NULL,
                total DOUBLE PRECISION NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS order_items (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                quantity INTEGER NOT NULL,
                order_id TEXT NOT NULL REFERENCES orders(id),
                product_id TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn insert_with_items(
        &self,
        order: OrderRow,
        items: Vec<OrderItemRow>,
    ) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES ($1, $2, $3)")
            .bind(&order.id)
            .bind(&order.customer_id)
            .bind(order.total)
            .execute(&mut *tx)
            .await?;

        for item in &items {
            sqlx::query(
                "INSERT INTO order_items (id, name, price, quantity, order_id, product_id)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(&item.id)
            .bind(&item.name)
            .bind(item.price)
            .bind(item.quantity)
            .bind(&item.order_id)
            .bind(&item.product_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(
            order_id = %order.id,
            item_count = items.len(),
            "inserted order with items"
        );
        Ok(())
    }

    async fn update_order(&self, order: OrderRow) -> anyhow::Result<()> {
        sqlx::query("UPDATE orders SET customer_id = $2, total = $3 WHERE id = $1")
            .bind(&order.id)
            .bind(&order.customer_id)
            .bind(order.total)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_item(&self, item: OrderItemRow) -> anyhow::Result<()> {
        sqlx::query(
            "UPDATE order_items
             SET name = $2, price = $3, quantity = $4, order_id = $5, product_id = $6
             WHERE id = $1",
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.quantity)
        .bind(&item.order_id)
        .bind(&item.product_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn fetch(&self, id: &str) -> anyhow::Result<Option<(OrderRow, Vec<OrderItemRow>)>> {
        let order: Option<OrderRow> =
            sqlx::query_as("SELECT id, customer_id, total FROM orders WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items: Vec<OrderItemRow> = sqlx::query_as(
            "SELECT id, name, price, quantity, order_id, product_id
             FROM order_items WHERE order_id = $1",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some((order, items)))
    }

    async fn fetch_all(&self) -> anyhow::Result<Vec<(OrderRow, Vec<OrderItemRow>)>> {
        let orders: Vec<OrderRow> = sqlx::query_as("SELECT id, customer_id, total FROM orders")
            .fetch_all(&self.pool)
            .await?;

        let items: Vec<OrderItemRow> = sqlx::query_as(
            "SELECT id, name, price, quantity, order_id, product_id FROM order_items",
        )
        .fetch_all(&self.pool)
        .await?;

        let result = orders
            .into_iter()
            .map(|order| {
                let children = items
                    .iter()
                    .filter(|item| item.order_id == order.id)
                    .cloned()
                    .collect();
                (order, children)
            })
            .collect();

        Ok(result)
    }
}

// Database-backed behavior (transactional insert, by-key updates, joined
// reads) needs a live Postgres and is exercised against MemoryOrderStore in
// `repository.rs`; the SQL here stays in lockstep with the schema in
// `init_schema`.
