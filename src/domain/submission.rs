use serde::Deserialize;

/// Checkout form field name for the operator select.
pub const FIELD_OPERATOR: &str = "mm_operator";
/// Checkout form field name for the sender phone number input.
pub const FIELD_SENDER_MSISDN: &str = "mm_sender_msisdn";
/// Checkout form field name for the transaction ID input.
pub const FIELD_TRANSACTION_ID: &str = "mm_transaction_id";

/// Raw shopper input from the checkout form.
///
/// `operator` is free text as far as the gateway is concerned: it is not
/// checked for membership in the active operator list. Reconciliation is a
/// manual back-office step.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct Submission {
    pub operator: String,
    pub sender_msisdn: String,
    pub transaction_id: String,
}
