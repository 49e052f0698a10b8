use crate::constants::ITEM_REMOVED;
use crate::core::errors::{FieldError, RemoError};
use crate::core::models::cart::{CartItem, CartTotals, NewCartItem, Pricing};
use crate::core::models::notification::Notification;
use crate::core::validation::require_text;
use crate::infrastructure::notifications::Notifier;
use crate::infrastructure::storage::storage_keys::CART_KEY;
use crate::infrastructure::storage::{KeyValueStore, load_list, save_json};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct CartService<S: KeyValueStore, N: Notifier> {
    storage: S,
    notifier: N,
    pricing: Pricing,
}

impl<S: KeyValueStore, N: Notifier> CartService<S, N> {
    pub fn new(storage: S, notifier: N, pricing: Pricing) -> Self {
        CartService {
            storage,
            notifier,
            pricing,
        }
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub async fn items(&self) -> Result<Vec<CartItem>, RemoError> {
        load_list(&self.storage, CART_KEY).await
    }

    async fn store(&self, items: &[CartItem]) -> Result<(), RemoError> {
        save_json(&self.storage, CART_KEY, items).await
    }

    /// Appends a line under a fresh id. Identical configurations are not merged.
    pub async fn add_item(&self, item: NewCartItem) -> Result<CartItem, RemoError> {
        require_text("color", &item.color)?;
        require_text("material", &item.material)?;
        require_text("pattern", &item.pattern)?;
        if item.quantity < 1 {
            return Err(RemoError::InvalidInput(
                "quantity".to_string(),
                FieldError::new("quantity", "Invalid quantity", "Quantity must be at least 1"),
            ));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(RemoError::InvalidInput(
                "price".to_string(),
                FieldError::new("price", "Invalid price", "Price cannot be negative"),
            ));
        }

        let line = CartItem {
            id: Uuid::new_v4().to_string(),
            category: item.category,
            color: item.color,
            material: item.material,
            pattern: item.pattern,
            price: item.price,
            quantity: item.quantity,
            created_at: None,
        };
        self.append(line.clone()).await?;
        Ok(line)
    }

    pub(crate) async fn append(&self, line: CartItem) -> Result<(), RemoError> {
        let mut items = self.items().await?;
        info!("Adding {} {} to cart as {}", line.quantity, line.category, line.id);
        items.push(line);
        self.store(&items).await
    }

    /// Quantities below one are ignored and nothing is written. Quantities that do not fit a
    /// `u32` are rejected.
    pub async fn update_quantity(&self, id: &str, quantity: i64) -> Result<Vec<CartItem>, RemoError> {
        let mut items = self.items().await?;
        if quantity < 1 {
            debug!("Ignoring quantity {} for cart item {}", quantity, id);
            return Ok(items);
        }
        let quantity = u32::try_from(quantity).map_err(|_| {
            RemoError::InvalidInput(
                "quantity".to_string(),
                FieldError::new("quantity", "Invalid quantity", "Quantity is too large"),
            )
        })?;
        for item in items.iter_mut().filter(|item| item.id == id) {
            item.quantity = quantity;
        }
        self.store(&items).await?;
        Ok(items)
    }

    pub async fn remove_item(&self, id: &str) -> Result<Vec<CartItem>, RemoError> {
        let mut items = self.items().await?;
        items.retain(|item| item.id != id);
        self.store(&items).await?;
        info!("Removed cart item {}", id);
        self.notifier
            .notify(Notification::info(
                ITEM_REMOVED,
                "Item has been removed from your cart",
            ))
            .await?;
        Ok(items)
    }

    pub async fn compute_totals(&self) -> Result<CartTotals, RemoError> {
        let items = self.items().await?;
        Ok(CartTotals::compute(&items, &self.pricing))
    }

    pub async fn clear(&self) -> Result<(), RemoError> {
        self.storage.remove(CART_KEY).await?;
        debug!("Cart cleared");
        Ok(())
    }
}
