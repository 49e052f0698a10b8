use crate::core::errors::RemoError;
use crate::core::models::cart::CartItem;
use crate::core::models::design::{
    Design, DesignDraft, DraftSelection, GarmentCategory, GarmentOptions,
};
use crate::core::services::cart::CartService;
use crate::core::validation::require_text;
use crate::infrastructure::notifications::Notifier;
use crate::infrastructure::storage::storage_keys::DESIGNS_KEY;
use crate::infrastructure::storage::{KeyValueStore, load_list, save_json};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct CustomizerService<S: KeyValueStore, N: Notifier> {
    storage: S,
    cart: CartService<S, N>,
    design_price: f64,
    draft: Arc<RwLock<DesignDraft>>,
}

impl<S: KeyValueStore, N: Notifier> CustomizerService<S, N> {
    pub fn new(storage: S, cart: CartService<S, N>, design_price: f64) -> Self {
        CustomizerService {
            storage,
            cart,
            design_price,
            draft: Arc::new(RwLock::new(DesignDraft::default())),
        }
    }

    /// The working selection, starting from the shirts defaults.
    pub async fn draft(&self) -> DesignDraft {
        self.draft.read().await.clone()
    }

    pub async fn select_category(&self, category: GarmentCategory) -> DesignDraft {
        let mut draft = self.draft.write().await;
        *draft = draft.clone().with_category(category);
        debug!("Draft switched to {}", category);
        draft.clone()
    }

    pub async fn update_draft(&self, selection: DraftSelection) -> DesignDraft {
        let mut draft = self.draft.write().await;
        *draft = draft.clone().apply(selection);
        draft.clone()
    }

    pub async fn reset_draft(&self) -> DesignDraft {
        let mut draft = self.draft.write().await;
        *draft = draft.reset();
        draft.clone()
    }

    pub fn options(&self, category: GarmentCategory) -> GarmentOptions {
        category.options()
    }

    pub async fn designs(&self) -> Result<Vec<Design>, RemoError> {
        load_list(&self.storage, DESIGNS_KEY).await
    }

    /// Records the draft as a design and puts one of it in the cart under the same id.
    ///
    /// Selections are not checked against the category's catalog: switching category keeps
    /// the previous color and material, and those carry through to the saved design.
    pub async fn save_design(&self, draft: DesignDraft) -> Result<Design, RemoError> {
        require_text("color", &draft.color)?;
        require_text("material", &draft.material)?;
        require_text("pattern", &draft.pattern)?;

        let design = Design {
            id: Uuid::new_v4().to_string(),
            category: draft.category,
            color: draft.color,
            material: draft.material,
            pattern: draft.pattern,
            created_at: Utc::now(),
        };

        let mut designs = self.designs().await?;
        designs.push(design.clone());
        save_json(&self.storage, DESIGNS_KEY, &designs).await?;

        self.cart
            .append(CartItem {
                id: design.id.clone(),
                category: design.category,
                color: design.color.clone(),
                material: design.material.clone(),
                pattern: design.pattern.clone(),
                price: self.design_price,
                quantity: 1,
                created_at: Some(design.created_at),
            })
            .await?;

        info!("Saved {} design {}", design.category, design.id);
        Ok(design)
    }
}
