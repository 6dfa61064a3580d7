use std::time::Instant;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::{
    catalog,
    error::{AppError, AppResult},
    models::{Product, PurchaseSummary},
    params::{self, QueryPairs},
    AppState,
};

// ── GET /productos ────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Product>>)> {
    let start = Instant::now();
    let products = state.catalog.load().await?;

    info!(
        count = products.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed products"
    );

    Ok((StatusCode::OK, Json(products)))
}

// ── GET /productparams ────────────────────────────────────────────────────────

/// Builds a product straight from the query string. The catalog is not read.
pub async fn product_from_params(
    Query(query): Query<QueryPairs>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let id = params::int(query.first("id"), params::ID_MSG)?;
    let precio = params::float(query.first("precio"), params::PRECIO_MSG)?;
    let stock = params::int(query.first("stock"), params::STOCK_MSG)?;
    let publicado = params::boolean(query.first("publicado"), params::PUBLICADO_MSG)?;
    let fecha_de_creacion = params::rfc3339(query.first("fechaDeCreacion"), params::FECHA_MSG)?;

    let product = Product {
        id,
        nombre: query.text("nombre"),
        precio,
        stock,
        codigo: query.text("codigo"),
        publicado,
        fecha_de_creacion,
    };

    debug!(id = product.id, codigo = %product.codigo, "Echoed product params");

    Ok((StatusCode::OK, Json(product)))
}

// ── GET /products/:id ─────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    // An undecodable segment (e.g. `%FF`) is just another non-integer id.
    let Path(raw_id) = path.map_err(|_| AppError::BadRequest(params::ID_MSG.to_string()))?;
    let id = params::int(Some(raw_id.as_str()), params::ID_MSG)?;

    let products = state.catalog.load().await?;
    let product = catalog::find_by_id(&products, id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("producto no encontrado".to_string()))?;

    info!(id, "Fetched product");

    Ok((StatusCode::OK, Json(product)))
}

// ── GET /searchbyquantity ─────────────────────────────────────────────────────

pub async fn search_by_quantity(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> AppResult<(StatusCode, Json<Vec<Product>>)> {
    let min = params::int(query.first("min"), params::MIN_MSG)?;
    let max = params::int(query.first("max"), params::MAX_MSG)?;

    let products = state.catalog.load().await?;
    let found = catalog::within_stock(&products, min, max);

    info!(min, max, count = found.len(), "Searched products by stock");

    Ok((StatusCode::OK, Json(found)))
}

// ── GET /buy ──────────────────────────────────────────────────────────────────

/// Prices `cantidad` units of the product with `code_value`. Stock is untouched.
pub async fn buy(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> AppResult<(StatusCode, Json<PurchaseSummary>)> {
    let code = query.text("code_value");
    let cantidad = params::int(query.first("cantidad"), params::CANTIDAD_MSG)?;

    let products = state.catalog.load().await?;
    let product = catalog::find_by_code(&products, &code)
        .ok_or_else(|| AppError::NotFound("Producto no encontrado".to_string()))?;

    let summary = catalog::purchase(product, cantidad);

    info!(
        codigo = %code,
        cantidad,
        precio_total = summary.precio_total,
        "Simulated purchase"
    );

    Ok((StatusCode::OK, Json(summary)))
}
