use crate::core::models::design::{DesignDraft, DraftSelection, GarmentCategory};
use crate::tests::signed_in_service;

#[tokio::test]
async fn test_save_design_adds_matching_cart_line() {
    let (service, _, _) = signed_in_service().await;
    let customizer = service.customizer().await.unwrap();

    let draft = DesignDraft {
        category: GarmentCategory::Shoes,
        color: "#8B4513".to_string(),
        material: "suede".to_string(),
        pattern: "textured".to_string(),
    };
    let design = customizer.save_design(draft).await.unwrap();

    let designs = customizer.designs().await.unwrap();
    assert_eq!(designs, vec![design.clone()]);

    let items = service.cart().await.unwrap().items().await.unwrap();
    assert_eq!(items.len(), 1);
    let line = &items[0];
    assert_eq!(line.id, design.id);
    assert_eq!(line.category, GarmentCategory::Shoes);
    assert_eq!(line.color, "#8B4513");
    assert_eq!(line.material, "suede");
    assert_eq!(line.pattern, "textured");
    assert_eq!(line.price, 99.99);
    assert_eq!(line.quantity, 1);
    assert_eq!(line.created_at, Some(design.created_at));
}

#[tokio::test]
async fn test_saved_designs_accumulate_with_cart() {
    let (service, _, _) = signed_in_service().await;
    let customizer = service.customizer().await.unwrap();

    customizer.save_design(DesignDraft::default()).await.unwrap();
    customizer
        .save_design(DesignDraft::for_category(GarmentCategory::Pants))
        .await
        .unwrap();

    assert_eq!(customizer.designs().await.unwrap().len(), 2);
    let totals = service.cart().await.unwrap().compute_totals().await.unwrap();
    assert!((totals.subtotal - 199.98).abs() < 1e-9);
    assert_eq!(totals.shipping, 0.0);
}

#[tokio::test]
async fn test_switching_category_carries_selection_into_saved_design() {
    let (service, _, _) = signed_in_service().await;
    let customizer = service.customizer().await.unwrap();

    let draft = DesignDraft::default().with_category(GarmentCategory::Shoes);
    assert_eq!(draft.material, "cotton");

    let design = customizer.save_design(draft).await.unwrap();
    assert_eq!(design.category, GarmentCategory::Shoes);
    assert_eq!(design.material, "cotton");
}

#[tokio::test]
async fn test_blank_selection_is_rejected() {
    let (service, _, _) = signed_in_service().await;
    let customizer = service.customizer().await.unwrap();

    let mut draft = DesignDraft::default();
    draft.color.clear();
    assert!(customizer.save_design(draft).await.is_err());
    assert!(customizer.designs().await.unwrap().is_empty());
    assert!(service.cart().await.unwrap().items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_options_follow_category() {
    let (service, _, _) = signed_in_service().await;
    let customizer = service.customizer().await.unwrap();

    let shoes = customizer.options(GarmentCategory::Shoes);
    assert_eq!(shoes.category, GarmentCategory::Shoes);
    assert_eq!(shoes.colors.len(), 6);
    assert!(shoes.materials.contains(&"leather".to_string()));
    assert_eq!(shoes.patterns, vec!["solid", "textured", "mixed"]);
}

#[tokio::test]
async fn test_draft_switches_category_and_resets() {
    let (service, _, _) = signed_in_service().await;
    let customizer = service.customizer().await.unwrap();

    let draft = customizer.draft().await;
    assert_eq!(draft, DesignDraft::default());
    assert_eq!(draft.color, "#8B5CF6");

    let draft = customizer
        .update_draft(DraftSelection {
            color: Some("#EF4444".to_string()),
            pattern: Some("dots".to_string()),
            ..DraftSelection::default()
        })
        .await;
    assert_eq!(draft.color, "#EF4444");
    assert_eq!(draft.material, "cotton");
    assert_eq!(draft.pattern, "dots");

    let draft = customizer.select_category(GarmentCategory::Pants).await;
    assert_eq!(draft.category, GarmentCategory::Pants);
    assert_eq!(draft.color, "#EF4444");
    assert_eq!(draft.pattern, "dots");

    let draft = customizer.reset_draft().await;
    assert_eq!(draft, DesignDraft::for_category(GarmentCategory::Pants));
    assert_eq!(draft.color, "#1F2937");
    assert_eq!(draft.material, "denim");
    assert_eq!(draft.pattern, "solid");
    assert_eq!(customizer.draft().await, draft);
}
