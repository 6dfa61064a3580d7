//! Linear scans over a loaded catalog. All of these keep file order and, where
//! a single record is wanted, return the first match.

use crate::models::{Product, PurchaseSummary};

pub fn find_by_id(products: &[Product], id: i64) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

pub fn find_by_code<'a>(products: &'a [Product], code: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.codigo == code)
}

/// Records with `min <= stock <= max`. An inverted range is simply empty.
pub fn within_stock(products: &[Product], min: i64, max: i64) -> Vec<Product> {
    products
        .iter()
        .filter(|p| (min..=max).contains(&p.stock))
        .cloned()
        .collect()
}

/// Price of `cantidad` units. Stock is neither checked nor touched.
pub fn purchase(product: &Product, cantidad: i64) -> PurchaseSummary {
    PurchaseSummary {
        nombre: product.nombre.clone(),
        cantidad,
        precio_total: product.precio * cantidad as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn make(id: i64, code: &str, stock: i64, precio: f64) -> Product {
        Product {
            id,
            nombre: format!("Producto {id}"),
            precio,
            stock,
            codigo: code.to_string(),
            publicado: true,
            fecha_de_creacion: DateTime::parse_from_rfc3339("2023-01-01T00:00:00Z").unwrap(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            make(1, "P001", 0, 10.0),
            make(2, "P002", 5, 2.5),
            make(3, "P003", 50, 7.0),
            make(2, "DUP", 9, 1.0),
        ]
    }

    #[test]
    fn find_by_id_first_match_wins() {
        let products = catalog();
        let found = find_by_id(&products, 2).unwrap();
        assert_eq!(found.codigo, "P002");
    }

    #[test]
    fn find_by_id_absent() {
        assert!(find_by_id(&catalog(), 42).is_none());
    }

    #[test]
    fn find_by_code_exact_match_only() {
        let products = catalog();
        assert_eq!(find_by_code(&products, "P003").unwrap().id, 3);
        assert!(find_by_code(&products, "p003").is_none());
        assert!(find_by_code(&products, "").is_none());
    }

    #[test]
    fn stock_range_is_inclusive_and_ordered() {
        let found = within_stock(&catalog(), 0, 9);
        let ids: Vec<(i64, &str)> = found.iter().map(|p| (p.id, p.codigo.as_str())).collect();
        assert_eq!(ids, vec![(1, "P001"), (2, "P002"), (2, "DUP")]);
    }

    #[test]
    fn stock_range_zero_zero() {
        let found = within_stock(&catalog(), 0, 0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn stock_range_inverted_or_out_of_bounds_is_empty() {
        assert!(within_stock(&catalog(), 10, 1).is_empty());
        assert!(within_stock(&catalog(), 100_000, 200_000).is_empty());
    }

    #[test]
    fn purchase_multiplies_unit_price() {
        let p = make(1, "P001", 0, 10.0);
        let summary = purchase(&p, 3);
        assert_eq!(summary.nombre, "Producto 1");
        assert_eq!(summary.cantidad, 3);
        assert!((summary.precio_total - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn purchase_ignores_stock() {
        // stock 0, still priced
        let p = make(1, "P001", 0, 2.0);
        assert!((purchase(&p, 1000).precio_total - 2000.0).abs() < f64::EPSILON);
        assert!((purchase(&p, -2).precio_total + 4.0).abs() < f64::EPSILON);
    }
}
