use super::order::Order;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

pub type SettingsStoreBox = Box<dyn SettingsStore>;
pub type OrderStoreBox = Box<dyn OrderStore>;
pub type CartBox = Box<dyn Cart>;

/// The host framework's gateway option storage. Values are plain strings,
/// keyed by the field keys of the admin settings schema.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// The host framework's order persistence.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn store(&self, order: Order) -> Result<()>;
    async fn get(&self, order_id: u64) -> Result<Option<Order>>;
    async fn all_orders(&self) -> Result<Vec<Order>>;
}

/// The active shopper cart for the current checkout request.
#[async_trait]
pub trait Cart: Send + Sync {
    async fn total(&self) -> Result<Decimal>;
    async fn empty(&self) -> Result<()>;
}
