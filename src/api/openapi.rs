use utoipa::OpenApi;

use crate::{
    api::models::{
        AdminLoginRequest, ErrorResponse, LoginRequest, SessionResponse, SignupRequest, StageResponse,
        UpdateQuantityRequest,
    },
    core::{
        errors::FieldError,
        models::{
            account::SessionUser,
            cart::{CartItem, CartTotals, NewCartItem},
            checkout::{CheckoutForm, CheckoutStage, CheckoutSummary, OrderConfirmation},
            design::{Design, DesignDraft, DraftSelection, GarmentCategory, GarmentOptions},
            notification::{Notification, NotificationVariant},
        },
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::login,
        super::handlers::signup,
        super::handlers::admin_login,
        super::handlers::logout,
        super::handlers::get_session,
        super::handlers::get_admin_session,
        super::handlers::get_notifications,
        super::handlers::get_cart,
        super::handlers::add_cart_item,
        super::handlers::update_cart_item,
        super::handlers::remove_cart_item,
        super::handlers::get_cart_totals,
        super::handlers::get_garment_options,
        super::handlers::get_draft,
        super::handlers::update_draft,
        super::handlers::select_draft_category,
        super::handlers::reset_draft,
        super::handlers::get_designs,
        super::handlers::save_design,
        super::handlers::get_checkout,
        super::handlers::proceed_to_checkout,
        super::handlers::back_to_summary,
        super::handlers::submit_checkout
    ),
    components(schemas(
        LoginRequest,
        SignupRequest,
        AdminLoginRequest,
        UpdateQuantityRequest,
        SessionResponse,
        StageResponse,
        ErrorResponse,
        FieldError,
        SessionUser,
        CartItem,
        NewCartItem,
        CartTotals,
        CheckoutForm,
        CheckoutStage,
        CheckoutSummary,
        OrderConfirmation,
        Design,
        DesignDraft,
        DraftSelection,
        GarmentCategory,
        GarmentOptions,
        Notification,
        NotificationVariant
    )),
    info(
        title = "REMO Storefront API",
        description = "Session, cart, customizer and checkout state for the REMO storefront",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
