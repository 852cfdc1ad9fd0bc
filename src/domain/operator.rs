use serde::{Deserialize, Serialize};

/// Maximum number of operator slots a merchant can configure.
pub const MAX_OPERATOR_SLOTS: usize = 4;

/// A mobile money operator the merchant accepts transfers through.
///
/// A configured slot is "active" iff its name is non-blank. Neither names nor
/// phone numbers are required to be unique across slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    /// Display name, e.g. "Wave" or "MTN Money".
    pub name: String,
    /// The merchant's receiving phone number for this operator.
    pub phone: String,
    /// Payment instruction shown to the shopper (app steps, USSD code, ...).
    pub instruction: String,
}

impl Operator {
    pub fn is_active(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Derives the ordered list of active operators from the configured slots.
///
/// Insertion order is preserved and blank-name slots are dropped. A fully
/// blank configuration yields an empty list; callers render no options.
pub fn active_operators(slots: &[Operator]) -> Vec<Operator> {
    slots
        .iter()
        .take(MAX_OPERATOR_SLOTS)
        .filter(|slot| slot.is_active())
        .cloned()
        .collect()
}
