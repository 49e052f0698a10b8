use crate::constants::{CHECKOUT_INCOMPLETE, ORDER_ID_PREFIX, ORDER_PLACED};
use crate::core::errors::RemoError;
use crate::core::models::cart::CartTotals;
use crate::core::models::checkout::{CheckoutForm, CheckoutStage, CheckoutSummary, OrderConfirmation};
use crate::core::models::notification::Notification;
use crate::core::services::cart::CartService;
use crate::infrastructure::notifications::Notifier;
use crate::infrastructure::storage::KeyValueStore;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

/// Summary → Form → (submit) → Summary. Nothing is charged and no order is stored.
#[derive(Clone)]
pub struct CheckoutService<S: KeyValueStore, N: Notifier> {
    cart: CartService<S, N>,
    notifier: N,
    stage: Arc<RwLock<CheckoutStage>>,
}

impl<S: KeyValueStore, N: Notifier> CheckoutService<S, N> {
    pub fn new(cart: CartService<S, N>, notifier: N) -> Self {
        CheckoutService {
            cart,
            notifier,
            stage: Arc::new(RwLock::new(CheckoutStage::Summary)),
        }
    }

    pub async fn stage(&self) -> CheckoutStage {
        *self.stage.read().await
    }

    pub async fn summary(&self) -> Result<CheckoutSummary, RemoError> {
        let items = self.cart.items().await?;
        let totals = CartTotals::compute(&items, self.cart.pricing());
        Ok(CheckoutSummary {
            stage: self.stage().await,
            items,
            totals,
        })
    }

    pub async fn proceed(&self) -> Result<CheckoutStage, RemoError> {
        if self.cart.items().await?.is_empty() {
            return Err(RemoError::EmptyCart);
        }
        *self.stage.write().await = CheckoutStage::Form;
        Ok(CheckoutStage::Form)
    }

    pub async fn back_to_summary(&self) -> CheckoutStage {
        *self.stage.write().await = CheckoutStage::Summary;
        CheckoutStage::Summary
    }

    pub async fn submit(&self, form: CheckoutForm) -> Result<OrderConfirmation, RemoError> {
        if self.stage().await != CheckoutStage::Form {
            return Err(RemoError::CheckoutNotStarted);
        }

        let missing = form.missing_fields();
        if !missing.is_empty() {
            warn!("Checkout submitted without {}", missing.join(", "));
            self.notifier
                .notify(Notification::failure(
                    CHECKOUT_INCOMPLETE,
                    "Please fill out all checkout fields",
                ))
                .await?;
            return Err(RemoError::MissingCheckoutFields(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        let items = self.cart.items().await?;
        if items.is_empty() {
            return Err(RemoError::EmptyCart);
        }
        let totals = CartTotals::compute(&items, self.cart.pricing());
        let order_id = format!(
            "{}-{}",
            ORDER_ID_PREFIX,
            Uuid::new_v4().simple().to_string().to_uppercase()
        );

        self.cart.clear().await?;
        *self.stage.write().await = CheckoutStage::Summary;

        info!("Placed order {} for {:.2}", order_id, totals.total);
        self.notifier
            .notify(Notification::info(
                ORDER_PLACED,
                format!("Your order {} is being processed", order_id),
            ))
            .await?;

        Ok(OrderConfirmation {
            order_id,
            totals,
            item_count: items.iter().map(|item| u64::from(item.quantity)).sum(),
            placed_at: Utc::now(),
        })
    }
}
