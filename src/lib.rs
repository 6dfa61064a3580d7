//! Read-only product catalog over HTTP.
//!
//! One handler library, two deployments: [`Variant::Full`] serves every
//! endpoint, [`Variant::ListOnly`] serves just the listing. Both load
//! `productos.json` fresh on every request.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod params;

pub use crate::catalog::Catalog;
pub use crate::config::{Config, Variant};

/// Shared application state. Holds where the catalog lives, never its records.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub variant: Variant,
}

impl AppState {
    pub fn new(variant: Variant, catalog_path: impl Into<std::path::PathBuf>) -> Self {
        let catalog = match variant {
            Variant::Full => Catalog::with_synthetic(catalog_path),
            Variant::ListOnly => Catalog::new(catalog_path),
        };
        Self { catalog, variant }
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))
        // ── Catalog listing ─────────────────────────────────────────────────
        .route("/productos", get(handlers::products::list_products));

    if state.variant == Variant::Full {
        router = router
            .route("/productparams", get(handlers::products::product_from_params))
            .route("/products/:id", get(handlers::products::get_product))
            .route(
                "/searchbyquantity",
                get(handlers::products::search_by_quantity),
            )
            .route("/buy", get(handlers::products::buy));
    }

    router
        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,catalog_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();
}

/// Shared bootstrap for both binaries: config, router, bind, serve.
pub async fn run(variant: Variant) -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::from_env(variant)?;
    let state = AppState::new(variant, &config.catalog_path);

    info!(
        service = variant.service_name(),
        variant = variant.label(),
        catalog = %config.catalog_path,
        "Starting catalog service"
    );

    let app = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
