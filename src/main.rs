use axum::{Router, http::header, routing::get};
use remo::{
    FileStore, InMemoryNotifier, InMemoryStore, RemoService, ServiceSettings,
    api::{handlers::api_routes, openapi::ApiDoc},
    config::CONFIG,
    infrastructure::storage::{KeyValueStore, SharedStore},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn open_store() -> Result<SharedStore, remo::RemoError> {
    match &CONFIG.storage_path {
        Some(path) => Ok(Arc::new(FileStore::open(path).await?)),
        None => {
            warn!("REMO_STORAGE_PATH not set, state is lost on restart");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}

fn watch_store(store: &SharedStore) {
    let mut events = store.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match event.new_value {
                    Some(value) => debug!(key = %event.key, bytes = value.len(), "Store updated"),
                    None => debug!(key = %event.key, "Store key removed"),
                },
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Store watcher skipped {} events", skipped)
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&CONFIG.log_level))
        .init();
    info!("Starting with {:?}", *CONFIG);
    if CONFIG.uses_demo_admin() {
        warn!("Admin login uses the demo credential; set REMO_ADMIN_USERNAME and REMO_ADMIN_PASSWORD");
    }

    let store = open_store().await?;
    watch_store(&store);
    let notifier = InMemoryNotifier::new();
    let service = Arc::new(RemoService::start(store, notifier, ServiceSettings::from_config(&CONFIG)).await?);

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
