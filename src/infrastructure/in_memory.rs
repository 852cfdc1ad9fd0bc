use crate::domain::order::Order;
use crate::domain::ports::{Cart, OrderStore, SettingsStore};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory gateway option storage.
///
/// Uses `Arc<RwLock<HashMap<String, String>>>` for shared concurrent access.
/// Stands in for the host framework's settings storage in tests and the CLI.
#[derive(Default, Clone)]
pub struct InMemorySettingsStore {
    options: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySettingsStore {
    /// Creates an empty store; every option falls back to its schema default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with saved options.
    pub fn with_options(options: HashMap<String, String>) -> Self {
        Self {
            options: Arc::new(RwLock::new(options)),
        }
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let options = self.options.read().await;
        Ok(options.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut options = self.options.write().await;
        options.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A thread-safe in-memory store for orders.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<u64, Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn store(&self, order: Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order);
        Ok(())
    }

    async fn get(&self, order_id: u64) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&order_id).cloned())
    }

    async fn all_orders(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }
}

/// An in-memory cart holding only the running total, which is all the
/// gateway ever reads from the host's cart.
#[derive(Default, Clone)]
pub struct InMemoryCart {
    total: Arc<RwLock<Decimal>>,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total(total: Decimal) -> Self {
        Self {
            total: Arc::new(RwLock::new(total)),
        }
    }
}

#[async_trait]
impl Cart for InMemoryCart {
    async fn total(&self) -> Result<Decimal> {
        let total = self.total.read().await;
        Ok(*total)
    }

    async fn empty(&self) -> Result<()> {
        let mut total = self.total.write().await;
        *total = Decimal::ZERO;
        Ok(())
    }
}
