use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata key for the operator the shopper paid through.
pub const META_OPERATOR: &str = "Operateur Mobile Money";
/// Metadata key for the phone number the transfer was sent from.
pub const META_SENDER_MSISDN: &str = "Numéro Mobile Money";
/// Metadata key for the operator-issued transaction ID.
pub const META_TRANSACTION_ID: &str = "ID transaction Mobile Money";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Freshly placed, payment not yet claimed.
    #[default]
    Pending,
    /// Payment claimed by the shopper, awaiting manual confirmation by staff.
    OnHold,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::OnHold => write!(f, "on-hold"),
        }
    }
}

/// An order owned by the host framework.
///
/// The gateway mutates an order exactly once, at payment submission: three
/// metadata entries plus a status transition. It never reads it back.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub id: u64,
    pub status: OrderStatus,
    /// Note attached to the last status transition.
    pub status_note: Option<String>,
    meta: Vec<(String, String)>,
}

impl Order {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            status: OrderStatus::Pending,
            status_note: None,
            meta: Vec::new(),
        }
    }

    /// Inserts or replaces a metadata entry, preserving insertion order.
    pub fn update_meta_data(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.meta.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.meta.push((key.to_string(), value.to_string()));
        }
    }

    pub fn get_meta(&self, key: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn meta(&self) -> &[(String, String)] {
        &self.meta
    }

    pub fn update_status(&mut self, status: OrderStatus, note: &str) {
        self.status = status;
        self.status_note = Some(note.to_string());
    }

    /// Receipt URL the shopper is redirected to after a successful checkout.
    pub fn return_url(&self) -> String {
        format!("/checkout/order-received/{}/", self.id)
    }
}
