use crate::domain::order::Order;
use crate::domain::ports::{OrderStore, SettingsStore};
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for gateway options.
pub const CF_SETTINGS: &str = "settings";
/// Column Family for orders.
pub const CF_ORDERS: &str = "orders";

/// A persistent store implementation using RocksDB.
///
/// Handles storage for both gateway options and `Order` entities using
/// separate Column Families. Orders are JSON-serialized under their
/// big-endian id; options are stored as raw UTF-8 under their key.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the required column families exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_settings = ColumnFamilyDescriptor::new(CF_SETTINGS, Options::default());
        let cf_orders = ColumnFamilyDescriptor::new(CF_ORDERS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_settings, cf_orders])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self, name: &str) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            GatewayError::InternalError(Box::new(std::io::Error::other(format!(
                "{name} column family not found"
            ))))
        })
    }
}

#[async_trait]
impl SettingsStore for RocksDBStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let cf = self.cf(CF_SETTINGS)?;
        match self.db.get_cf(cf, key.as_bytes())? {
            Some(bytes) => {
                let value = String::from_utf8(bytes)
                    .map_err(|e| GatewayError::InternalError(Box::new(e)))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let cf = self.cf(CF_SETTINGS)?;
        self.db.put_cf(cf, key.as_bytes(), value.as_bytes())?;
        Ok(())
    }
}

#[async_trait]
impl OrderStore for RocksDBStore {
    async fn store(&self, order: Order) -> Result<()> {
        let cf = self.cf(CF_ORDERS)?;
        let key = order.id.to_be_bytes();
        let value =
            serde_json::to_vec(&order).map_err(|e| GatewayError::InternalError(Box::new(e)))?;
        self.db.put_cf(cf, key, value)?;
        Ok(())
    }

    async fn get(&self, order_id: u64) -> Result<Option<Order>> {
        let cf = self.cf(CF_ORDERS)?;
        match self.db.get_cf(cf, order_id.to_be_bytes())? {
            Some(bytes) => {
                let order = serde_json::from_slice(&bytes)
                    .map_err(|e| GatewayError::InternalError(Box::new(e)))?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    async fn all_orders(&self) -> Result<Vec<Order>> {
        let cf = self.cf(CF_ORDERS)?;

        let mut orders = Vec::new();
        let iter = self.db.iterator_cf(cf, rocksdb::IteratorMode::Start);

        for item in iter {
            let (_key, value) = item?;
            let order: Order = serde_json::from_slice(&value)
                .map_err(|e| GatewayError::InternalError(Box::new(e)))?;
            orders.push(order);
        }

        Ok(orders)
    }
}
