use crate::{
    api::models::*,
    core::{
        models::{
            account::SessionUser,
            cart::{CartItem, CartTotals, NewCartItem},
            checkout::{CheckoutForm, CheckoutSummary, OrderConfirmation},
            design::{Design, DesignDraft, DraftSelection, GarmentCategory, GarmentOptions},
            notification::Notification,
        },
        services::RemoService,
    },
    infrastructure::{notifications::in_memory::InMemoryNotifier, storage::SharedStore},
};
use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
    routing::{get, post, put},
};
use std::sync::Arc;

pub type AppService = RemoService<SharedStore, InMemoryNotifier>;

/// Middleware rejecting requests without a signed-in user
async fn session_middleware(
    State(service): State<Arc<AppService>>,
    req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    service.session().require_user().await?;
    Ok(next.run(req).await)
}

async fn admin_middleware(
    State(service): State<Arc<AppService>>,
    req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    service.session().require_admin().await?;
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    let shopper_routes = Router::new()
        .route("/cart", get(get_cart))
        .route("/cart/items", post(add_cart_item))
        .route(
            "/cart/items/{item_id}",
            put(update_cart_item).delete(remove_cart_item),
        )
        .route("/cart/totals", get(get_cart_totals))
        .route("/customizer/options/{category}", get(get_garment_options))
        .route("/customizer/draft", get(get_draft).put(update_draft))
        .route("/customizer/draft/category/{category}", put(select_draft_category))
        .route("/customizer/draft/reset", post(reset_draft))
        .route("/customizer/designs", get(get_designs).post(save_design))
        .route("/checkout", get(get_checkout))
        .route("/checkout/proceed", post(proceed_to_checkout))
        .route("/checkout/back", post(back_to_summary))
        .route("/checkout/submit", post(submit_checkout))
        .route_layer(middleware::from_fn_with_state(service.clone(), session_middleware));

    let admin_routes = Router::new()
        .route("/admin/session", get(get_admin_session))
        .route_layer(middleware::from_fn_with_state(service.clone(), admin_middleware));

    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup))
        .route("/auth/admin/login", post(admin_login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(get_session))
        .route("/notifications", get(get_notifications))
        .merge(shopper_routes)
        .merge(admin_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = SessionUser),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn login(
    State(service): State<Arc<AppService>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionUser>, ApiError> {
    let user = service.session().login(&req.email, &req.password).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created, not signed in", body = SessionUser),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn signup(
    State(service): State<Arc<AppService>>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SessionUser>), ApiError> {
    let user = service
        .session()
        .signup(&req.name, &req.email, &req.password)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/auth/admin/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Admin session started", body = SessionUser),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 401, description = "Invalid admin credentials", body = ErrorResponse)
    )
)]
async fn admin_login(
    State(service): State<Arc<AppService>>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<SessionUser>, ApiError> {
    let admin = service
        .session()
        .admin_login(&req.username, &req.password)
        .await?;
    Ok(Json(admin))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn logout(State(service): State<Arc<AppService>>) -> Result<StatusCode, ApiError> {
    service.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current session, if any", body = SessionResponse)
    )
)]
async fn get_session(State(service): State<Arc<AppService>>) -> Json<SessionResponse> {
    Json(SessionResponse::from(service.current_user().await))
}

#[utoipa::path(
    get,
    path = "/api/admin/session",
    responses(
        (status = 200, description = "Admin session", body = SessionUser),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse)
    )
)]
async fn get_admin_session(State(service): State<Arc<AppService>>) -> Result<Json<SessionUser>, ApiError> {
    let admin = service.session().require_admin().await?;
    Ok(Json(admin))
}

#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Notifications raised since the last call", body = Vec<Notification>)
    )
)]
async fn get_notifications(
    State(service): State<Arc<AppService>>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = service.take_notifications().await?;
    Ok(Json(notifications))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart line items", body = Vec<CartItem>),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn get_cart(State(service): State<Arc<AppService>>) -> Result<Json<Vec<CartItem>>, ApiError> {
    let items = service.cart().await?.items().await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/cart/items",
    request_body = NewCartItem,
    responses(
        (status = 201, description = "Line item added", body = CartItem),
        (status = 400, description = "Invalid line item", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn add_cart_item(
    State(service): State<Arc<AppService>>,
    Json(req): Json<NewCartItem>,
) -> Result<(StatusCode, Json<CartItem>), ApiError> {
    let item = service.cart().await?.add_item(req).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/cart/items/{item_id}",
    params(
        ("item_id" = String, Path, description = "ID of the cart line item")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Cart after the update; quantities below 1 are ignored", body = Vec<CartItem>),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn update_cart_item(
    State(service): State<Arc<AppService>>,
    Path(item_id): Path<String>,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<Json<Vec<CartItem>>, ApiError> {
    let items = service
        .cart()
        .await?
        .update_quantity(&item_id, req.quantity)
        .await?;
    Ok(Json(items))
}

#[utoipa::path(
    delete,
    path = "/api/cart/items/{item_id}",
    params(
        ("item_id" = String, Path, description = "ID of the cart line item")
    ),
    responses(
        (status = 200, description = "Cart after the removal", body = Vec<CartItem>),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn remove_cart_item(
    State(service): State<Arc<AppService>>,
    Path(item_id): Path<String>,
) -> Result<Json<Vec<CartItem>>, ApiError> {
    let items = service.cart().await?.remove_item(&item_id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/cart/totals",
    responses(
        (status = 200, description = "Subtotal, shipping, tax and total", body = CartTotals),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn get_cart_totals(State(service): State<Arc<AppService>>) -> Result<Json<CartTotals>, ApiError> {
    let totals = service.cart().await?.compute_totals().await?;
    Ok(Json(totals))
}

#[utoipa::path(
    get,
    path = "/api/customizer/options/{category}",
    params(
        ("category" = GarmentCategory, Path, description = "shirts, pants or shoes")
    ),
    responses(
        (status = 200, description = "Colors, materials and patterns", body = GarmentOptions),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn get_garment_options(
    State(service): State<Arc<AppService>>,
    Path(category): Path<GarmentCategory>,
) -> Result<Json<GarmentOptions>, ApiError> {
    let options = service.customizer().await?.options(category);
    Ok(Json(options))
}

#[utoipa::path(
    get,
    path = "/api/customizer/draft",
    responses(
        (status = 200, description = "Current customizer selection", body = DesignDraft),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn get_draft(State(service): State<Arc<AppService>>) -> Result<Json<DesignDraft>, ApiError> {
    let draft = service.customizer().await?.draft().await;
    Ok(Json(draft))
}

#[utoipa::path(
    put,
    path = "/api/customizer/draft",
    request_body = DraftSelection,
    responses(
        (status = 200, description = "Selection updated", body = DesignDraft),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn update_draft(
    State(service): State<Arc<AppService>>,
    Json(req): Json<DraftSelection>,
) -> Result<Json<DesignDraft>, ApiError> {
    let draft = service.customizer().await?.update_draft(req).await;
    Ok(Json(draft))
}

#[utoipa::path(
    put,
    path = "/api/customizer/draft/category/{category}",
    params(
        ("category" = GarmentCategory, Path, description = "shirts, pants or shoes")
    ),
    responses(
        (status = 200, description = "Category switched, other selections kept", body = DesignDraft),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn select_draft_category(
    State(service): State<Arc<AppService>>,
    Path(category): Path<GarmentCategory>,
) -> Result<Json<DesignDraft>, ApiError> {
    let draft = service.customizer().await?.select_category(category).await;
    Ok(Json(draft))
}

#[utoipa::path(
    post,
    path = "/api/customizer/draft/reset",
    responses(
        (status = 200, description = "Selection back to the category defaults", body = DesignDraft),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn reset_draft(State(service): State<Arc<AppService>>) -> Result<Json<DesignDraft>, ApiError> {
    let draft = service.customizer().await?.reset_draft().await;
    Ok(Json(draft))
}

#[utoipa::path(
    get,
    path = "/api/customizer/designs",
    responses(
        (status = 200, description = "Saved designs", body = Vec<Design>),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn get_designs(State(service): State<Arc<AppService>>) -> Result<Json<Vec<Design>>, ApiError> {
    let designs = service.customizer().await?.designs().await?;
    Ok(Json(designs))
}

#[utoipa::path(
    post,
    path = "/api/customizer/designs",
    request_body = DesignDraft,
    responses(
        (status = 201, description = "Design saved and added to the cart", body = Design),
        (status = 400, description = "Incomplete design", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn save_design(
    State(service): State<Arc<AppService>>,
    Json(req): Json<DesignDraft>,
) -> Result<(StatusCode, Json<Design>), ApiError> {
    let design = service.customizer().await?.save_design(req).await?;
    Ok((StatusCode::CREATED, Json(design)))
}

#[utoipa::path(
    get,
    path = "/api/checkout",
    responses(
        (status = 200, description = "Checkout stage, items and totals", body = CheckoutSummary),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn get_checkout(State(service): State<Arc<AppService>>) -> Result<Json<CheckoutSummary>, ApiError> {
    let summary = service.checkout().await?.summary().await?;
    Ok(Json(summary))
}

#[utoipa::path(
    post,
    path = "/api/checkout/proceed",
    responses(
        (status = 200, description = "Checkout form opened", body = StageResponse),
        (status = 400, description = "Cart is empty", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn proceed_to_checkout(State(service): State<Arc<AppService>>) -> Result<Json<StageResponse>, ApiError> {
    let stage = service.checkout().await?.proceed().await?;
    Ok(Json(StageResponse { stage }))
}

#[utoipa::path(
    post,
    path = "/api/checkout/back",
    responses(
        (status = 200, description = "Back on the summary", body = StageResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
async fn back_to_summary(State(service): State<Arc<AppService>>) -> Result<Json<StageResponse>, ApiError> {
    let stage = service.checkout().await?.back_to_summary().await;
    Ok(Json(StageResponse { stage }))
}

#[utoipa::path(
    post,
    path = "/api/checkout/submit",
    request_body = CheckoutForm,
    responses(
        (status = 200, description = "Order placed and cart cleared", body = OrderConfirmation),
        (status = 400, description = "Missing fields or empty cart", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 409, description = "Checkout form not open", body = ErrorResponse)
    )
)]
async fn submit_checkout(
    State(service): State<Arc<AppService>>,
    Json(req): Json<CheckoutForm>,
) -> Result<Json<OrderConfirmation>, ApiError> {
    let confirmation = service.checkout().await?.submit(req).await?;
    Ok(Json(confirmation))
}
