pub mod cart;
pub mod checkout;
pub mod customizer;
pub mod session;

use crate::config::Config;
use crate::constants::DESIGN_PRICE;
use crate::core::errors::RemoError;
use crate::core::models::account::SessionUser;
use crate::core::models::cart::Pricing;
use crate::core::models::notification::Notification;
use crate::infrastructure::credentials::{AdminCredentials, CredentialPolicy};
use crate::infrastructure::notifications::Notifier;
use crate::infrastructure::storage::KeyValueStore;
use cart::CartService;
use checkout::CheckoutService;
use customizer::CustomizerService;
use session::SessionService;
use tracing::info;

#[derive(Clone, Debug)]
pub struct ServiceSettings {
    pub admin: AdminCredentials,
    pub credential_policy: CredentialPolicy,
    pub pricing: Pricing,
    pub design_price: f64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        ServiceSettings {
            admin: AdminCredentials::default(),
            credential_policy: CredentialPolicy::default(),
            pricing: Pricing::default(),
            design_price: DESIGN_PRICE,
        }
    }
}

impl ServiceSettings {
    pub fn from_config(config: &Config) -> Self {
        ServiceSettings {
            admin: config.admin_credentials(),
            credential_policy: config.credential_policy,
            ..ServiceSettings::default()
        }
    }
}

/// Storefront state behind one handle. Cart, customizer and checkout require a session.
pub struct RemoService<S: KeyValueStore + Clone, N: Notifier + Clone> {
    session: SessionService<S, N>,
    cart: CartService<S, N>,
    customizer: CustomizerService<S, N>,
    checkout: CheckoutService<S, N>,
    notifier: N,
}

impl<S: KeyValueStore + Clone, N: Notifier + Clone> RemoService<S, N> {
    pub fn new(storage: S, notifier: N, settings: ServiceSettings) -> Self {
        let session = SessionService::new(
            storage.clone(),
            notifier.clone(),
            settings.admin,
            settings.credential_policy,
        );
        let cart = CartService::new(storage.clone(), notifier.clone(), settings.pricing);
        let customizer = CustomizerService::new(storage, cart.clone(), settings.design_price);
        let checkout = CheckoutService::new(cart.clone(), notifier.clone());
        RemoService {
            session,
            cart,
            customizer,
            checkout,
            notifier,
        }
    }

    /// Builds the service and picks up any session left in the store.
    pub async fn start(storage: S, notifier: N, settings: ServiceSettings) -> Result<Self, RemoError> {
        let service = Self::new(storage, notifier, settings);
        service.session.restore().await?;
        info!("Storefront state ready");
        Ok(service)
    }

    pub fn session(&self) -> &SessionService<S, N> {
        &self.session
    }

    pub async fn cart(&self) -> Result<&CartService<S, N>, RemoError> {
        self.session.require_user().await?;
        Ok(&self.cart)
    }

    pub async fn customizer(&self) -> Result<&CustomizerService<S, N>, RemoError> {
        self.session.require_user().await?;
        Ok(&self.customizer)
    }

    pub async fn checkout(&self) -> Result<&CheckoutService<S, N>, RemoError> {
        self.session.require_user().await?;
        Ok(&self.checkout)
    }

    /// Ends the session and drops any half-filled checkout.
    pub async fn logout(&self) -> Result<(), RemoError> {
        self.session.logout().await?;
        self.checkout.back_to_summary().await;
        Ok(())
    }

    pub async fn current_user(&self) -> Option<SessionUser> {
        self.session.current_user().await
    }

    pub async fn take_notifications(&self) -> Result<Vec<Notification>, RemoError> {
        self.notifier.drain().await
    }
}
