//! Bundled Product Catalog

use crate::logging;
use crate::models::Product;

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// Parse a catalog document, skipping archived products
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, String> {
    let products: Vec<Product> = serde_json::from_str(json).map_err(|e| e.to_string())?;
    Ok(products.into_iter().filter(|p| !p.is_archived).collect())
}

/// Products shown in the shop; empty if the bundled catalog is malformed
pub fn load_catalog() -> Vec<Product> {
    match parse_catalog(CATALOG_JSON) {
        Ok(products) => {
            logging::info("CATALOG", &format!("Loaded {} products", products.len()));
            products
        }
        Err(e) => {
            logging::error("CATALOG", &format!("Error parsing catalog: {}", e));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_bundled_catalog_parses() {
        let products = parse_catalog(CATALOG_JSON).unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id, "p1");
        assert_eq!(products[2].price, Decimal::from(12));
        assert!(products.iter().all(|p| p.images.is_empty()));
        assert_eq!(load_catalog().len(), 3);
    }

    #[test]
    fn test_archived_products_skipped() {
        let json = r#"[
            { "id": "a", "name": "A", "price": 1, "isArchived": true,
              "color": { "name": "Red" }, "size": { "value": "S" } },
            { "id": "b", "name": "B", "price": 2,
              "color": { "name": "Red" }, "size": { "value": "S" } }
        ]"#;

        let products = parse_catalog(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "b");
    }

    #[test]
    fn test_malformed_catalog_is_error() {
        assert!(parse_catalog("{ not json").is_err());
    }
}
