//! Loading the product catalog from its backing JSON file.
//!
//! There is no cache: every call to [`Catalog::load`] reads and decodes the
//! file again, so edits to `productos.json` are visible on the next request.

pub mod query;

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local};
use tracing::debug;

use crate::models::Product;

pub use query::{find_by_code, find_by_id, purchase, within_stock};

pub const DEFAULT_CATALOG_PATH: &str = "productos.json";

/// Identifier of the record appended by [`Catalog::with_synthetic`].
pub const SYNTHETIC_ID: i64 = 7;
pub const SYNTHETIC_CODE: &str = "P007";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Handle on the backing file. Cheap to clone; holds no records.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
    synthetic: bool,
}

impl Catalog {
    /// Plain loader: returns exactly what the file contains.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            synthetic: false,
        }
    }

    /// Loader that appends "Producto 7" after the file's records on every call.
    pub fn with_synthetic(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            synthetic: true,
        }
    }

    /// Reads and decodes the file, preserving file order.
    pub async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        let mut products = decode(&bytes).map_err(|source| CatalogError::Decode {
            path: self.path.clone(),
            source,
        })?;

        if self.synthetic {
            products.push(synthetic_product(Local::now().fixed_offset()));
        }

        debug!(
            path = %self.path.display(),
            count = products.len(),
            "Loaded catalog"
        );

        Ok(products)
    }
}

/// A `null` document is an empty catalog.
pub fn decode(bytes: &[u8]) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_slice::<Option<Vec<Product>>>(bytes).map(Option::unwrap_or_default)
}

/// The in-memory extra record. Only its creation time varies between calls.
pub fn synthetic_product(created_at: DateTime<FixedOffset>) -> Product {
    Product {
        id: SYNTHETIC_ID,
        nombre: "Producto 7".to_string(),
        precio: 99.99,
        stock: 10,
        codigo: SYNTHETIC_CODE.to_string(),
        publicado: true,
        fecha_de_creacion: created_at,
    }
}
