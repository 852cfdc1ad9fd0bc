use crate::application::settings::GatewaySettings;
use crate::domain::operator::Operator;
use crate::domain::order::{
    META_OPERATOR, META_SENDER_MSISDN, META_TRANSACTION_ID, Order, OrderStatus,
};
use crate::domain::ports::{CartBox, OrderStoreBox, SettingsStoreBox};
use crate::domain::submission::Submission;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

/// Checkout notice for a missing sender phone number.
pub const NOTICE_MISSING_MSISDN: &str = "Le numéro de téléphone est obligatoire !";
/// Checkout notice for a missing transaction ID.
pub const NOTICE_MISSING_TRANSACTION_ID: &str = "Veuillez préciser l'ID de la transaction !";
/// Order note attached when the order is placed on hold.
pub const NOTE_AWAITING_CONFIRMATION: &str = "En attente de confirmation.";

/// View model for the checkout payment fields. Interface renderers turn this
/// into the legacy or Blocks markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutFields {
    pub description: String,
    pub cart_total: Decimal,
    pub operators: Vec<Operator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOutcome {
    Success,
}

/// Outcome of a processed payment, carrying the receipt redirect target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentResult {
    pub result: PaymentOutcome,
    pub redirect: String,
}

/// The capability set a payment gateway exposes to the host framework.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Reloads the gateway configuration from the settings store.
    async fn configure(&mut self) -> Result<()>;

    /// The checkout form view for the current cart.
    async fn payment_fields(&self) -> Result<CheckoutFields>;

    /// Checks the submission for the two required fields. Each failure is a
    /// user-facing checkout notice; the order is never touched.
    fn validate_fields(&self, submission: &Submission) -> Result<()>;

    /// Annotates the order with the submission, places it on hold and empties
    /// the cart.
    async fn process_payment(&self, order_id: u64, submission: &Submission)
    -> Result<PaymentResult>;

    /// Capability flag only; no refund execution exists.
    fn supports_refunds(&self) -> bool {
        false
    }
}

/// Mobile Money gateway: collects a sender phone number and an
/// operator-issued transaction ID, then parks the order on hold for manual
/// confirmation. No payment-network communication takes place; staff verify
/// the captured transaction ID against their own mobile money account.
pub struct MobileMoneyGateway {
    settings: GatewaySettings,
    settings_store: SettingsStoreBox,
    order_store: OrderStoreBox,
    cart: CartBox,
}

impl MobileMoneyGateway {
    /// Builds the gateway and loads its settings snapshot.
    pub async fn new(
        settings_store: SettingsStoreBox,
        order_store: OrderStoreBox,
        cart: CartBox,
    ) -> Result<Self> {
        let settings = GatewaySettings::load(settings_store.as_ref()).await?;
        Ok(Self {
            settings,
            settings_store,
            order_store,
            cart,
        })
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    /// Consumes the gateway and returns the final state of all orders.
    pub async fn into_orders(self) -> Result<Vec<Order>> {
        self.order_store.all_orders().await
    }
}

#[async_trait]
impl PaymentGateway for MobileMoneyGateway {
    async fn configure(&mut self) -> Result<()> {
        self.settings = GatewaySettings::load(self.settings_store.as_ref()).await?;
        Ok(())
    }

    async fn payment_fields(&self) -> Result<CheckoutFields> {
        Ok(CheckoutFields {
            description: self.settings.description.clone(),
            cart_total: self.cart.total().await?,
            operators: self.settings.active_operators(),
        })
    }

    fn validate_fields(&self, submission: &Submission) -> Result<()> {
        if submission.sender_msisdn.is_empty() {
            return Err(GatewayError::ValidationError(
                NOTICE_MISSING_MSISDN.to_string(),
            ));
        }
        if submission.transaction_id.is_empty() {
            return Err(GatewayError::ValidationError(
                NOTICE_MISSING_TRANSACTION_ID.to_string(),
            ));
        }
        Ok(())
    }

    async fn process_payment(
        &self,
        order_id: u64,
        submission: &Submission,
    ) -> Result<PaymentResult> {
        self.validate_fields(submission)?;

        let mut order = self
            .order_store
            .get(order_id)
            .await?
            .ok_or(GatewayError::OrderNotFound(order_id))?;

        // The operator value is stored as submitted, with no membership check
        // against the active list and no duplicate-transaction-ID detection.
        order.update_meta_data(META_OPERATOR, &submission.operator);
        order.update_meta_data(META_SENDER_MSISDN, &submission.sender_msisdn);
        order.update_meta_data(META_TRANSACTION_ID, &submission.transaction_id);
        order.update_status(OrderStatus::OnHold, NOTE_AWAITING_CONFIRMATION);

        let redirect = order.return_url();
        self.order_store.store(order).await?;
        self.cart.empty().await?;

        tracing::debug!(
            order_id,
            operator = %submission.operator,
            "order placed on hold, awaiting manual confirmation"
        );

        Ok(PaymentResult {
            result: PaymentOutcome::Success,
            redirect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{Cart, OrderStore, SettingsStore};
    use crate::infrastructure::in_memory::{
        InMemoryCart, InMemoryOrderStore, InMemorySettingsStore,
    };
    use rust_decimal_macros::dec;

    async fn gateway_with(order_store: InMemoryOrderStore, cart: InMemoryCart) -> MobileMoneyGateway {
        MobileMoneyGateway::new(
            Box::new(InMemorySettingsStore::new()),
            Box::new(order_store),
            Box::new(cart),
        )
        .await
        .unwrap()
    }

    fn submission(operator: &str, msisdn: &str, tx_id: &str) -> Submission {
        Submission {
            operator: operator.to_string(),
            sender_msisdn: msisdn.to_string(),
            transaction_id: tx_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_process_payment_annotates_order() {
        let orders = InMemoryOrderStore::new();
        let cart = InMemoryCart::with_total(dec!(15000.0));
        orders.store(Order::new(42)).await.unwrap();

        let gateway = gateway_with(orders.clone(), cart.clone()).await;
        let result = gateway
            .process_payment(42, &submission("Wave", "0707070707", "TX-9F3A"))
            .await
            .unwrap();

        assert_eq!(result.result, PaymentOutcome::Success);
        assert_eq!(result.redirect, "/checkout/order-received/42/");

        let order = orders.get(42).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::OnHold);
        assert_eq!(order.status_note.as_deref(), Some(NOTE_AWAITING_CONFIRMATION));
        assert_eq!(order.meta().len(), 3);
        assert_eq!(order.get_meta(META_OPERATOR), Some("Wave"));
        assert_eq!(order.get_meta(META_SENDER_MSISDN), Some("0707070707"));
        assert_eq!(order.get_meta(META_TRANSACTION_ID), Some("TX-9F3A"));

        assert_eq!(cart.total().await.unwrap(), dec!(0));
    }

    #[tokio::test]
    async fn test_missing_msisdn_rejected_without_mutation() {
        let orders = InMemoryOrderStore::new();
        orders.store(Order::new(1)).await.unwrap();
        let cart = InMemoryCart::with_total(dec!(500.0));

        let gateway = gateway_with(orders.clone(), cart.clone()).await;
        let err = gateway
            .process_payment(1, &submission("Wave", "", "TX1"))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::ValidationError(ref msg) if msg == NOTICE_MISSING_MSISDN));

        let order = orders.get(1).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.meta().is_empty());
        // Cart untouched on rejection.
        assert_eq!(cart.total().await.unwrap(), dec!(500.0));
    }

    #[tokio::test]
    async fn test_missing_transaction_id_rejected_without_mutation() {
        let orders = InMemoryOrderStore::new();
        orders.store(Order::new(1)).await.unwrap();

        let gateway = gateway_with(orders.clone(), InMemoryCart::new()).await;
        let err = gateway
            .process_payment(1, &submission("Wave", "0707070707", ""))
            .await
            .unwrap_err();

        assert!(
            matches!(err, GatewayError::ValidationError(ref msg) if msg == NOTICE_MISSING_TRANSACTION_ID)
        );

        let order = orders.get(1).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.meta().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_order_id() {
        let gateway = gateway_with(InMemoryOrderStore::new(), InMemoryCart::new()).await;
        let err = gateway
            .process_payment(99, &submission("Wave", "0707070707", "TX1"))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::OrderNotFound(99)));
    }

    #[tokio::test]
    async fn test_duplicate_transaction_ids_both_succeed() {
        // Documents current behavior: no duplicate-payment detection exists,
        // two orders may carry the same transaction ID.
        let orders = InMemoryOrderStore::new();
        orders.store(Order::new(1)).await.unwrap();
        orders.store(Order::new(2)).await.unwrap();

        let gateway = gateway_with(orders.clone(), InMemoryCart::new()).await;
        gateway
            .process_payment(1, &submission("Wave", "0707070707", "TX-DUP"))
            .await
            .unwrap();
        gateway
            .process_payment(2, &submission("Wave", "0102030405", "TX-DUP"))
            .await
            .unwrap();

        let first = orders.get(1).await.unwrap().unwrap();
        let second = orders.get(2).await.unwrap().unwrap();
        assert_eq!(first.get_meta(META_TRANSACTION_ID), Some("TX-DUP"));
        assert_eq!(second.get_meta(META_TRANSACTION_ID), Some("TX-DUP"));
        assert_eq!(first.status, OrderStatus::OnHold);
        assert_eq!(second.status, OrderStatus::OnHold);
    }

    #[tokio::test]
    async fn test_operator_accepted_as_free_text() {
        // The submitted operator is not checked against the active list.
        let orders = InMemoryOrderStore::new();
        orders.store(Order::new(1)).await.unwrap();

        let gateway = gateway_with(orders.clone(), InMemoryCart::new()).await;
        gateway
            .process_payment(1, &submission("Not A Real Operator", "0707070707", "TX1"))
            .await
            .unwrap();

        let order = orders.get(1).await.unwrap().unwrap();
        assert_eq!(order.get_meta(META_OPERATOR), Some("Not A Real Operator"));
    }

    #[tokio::test]
    async fn test_payment_fields_lists_active_operators() {
        let cart = InMemoryCart::with_total(dec!(2500.0));
        let gateway = gateway_with(InMemoryOrderStore::new(), cart).await;

        let fields = gateway.payment_fields().await.unwrap();
        assert_eq!(fields.cart_total, dec!(2500.0));
        // Default configuration ships three active operators.
        assert_eq!(fields.operators.len(), 3);
    }

    #[tokio::test]
    async fn test_configure_reloads_settings() {
        let settings_store = InMemorySettingsStore::new();
        let mut gateway = MobileMoneyGateway::new(
            Box::new(settings_store.clone()),
            Box::new(InMemoryOrderStore::new()),
            Box::new(InMemoryCart::new()),
        )
        .await
        .unwrap();

        assert!(!gateway.settings().enabled);
        settings_store.set("enabled", "yes").await.unwrap();
        gateway.configure().await.unwrap();
        assert!(gateway.settings().enabled);
    }

    #[tokio::test]
    async fn test_refund_support_is_a_flag_only() {
        let gateway = gateway_with(InMemoryOrderStore::new(), InMemoryCart::new()).await;
        assert!(!gateway.supports_refunds());
    }
}
