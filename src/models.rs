//! Frontend Models
//!
//! Data structures matching the storefront API entities.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Product data structure (matches storefront API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Decimal amount; the API may send it as a number or a numeric string
    #[serde(deserialize_with = "deserialize_price")]
    pub price: Decimal,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_archived: bool,
    pub color: Color,
    pub size: Size,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// CSS color value, e.g. "#0000ff"
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub id: String,
    pub url: String,
}

/// What to show in a product's thumbnail slot
#[derive(Debug, Clone, PartialEq)]
pub enum Thumbnail {
    Image(String),
    Placeholder,
}

impl Product {
    /// First image of the product, or a placeholder when it has none
    pub fn thumbnail(&self) -> Thumbnail {
        match self.images.first() {
            Some(image) => Thumbnail::Image(image.url.clone()),
            None => Thumbnail::Placeholder,
        }
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    // Floats go through their shortest decimal text so 1.005 stays 1.005
    let text = match RawPrice::deserialize(deserializer)? {
        RawPrice::Integer(n) => return Ok(Decimal::from(n)),
        RawPrice::Float(n) => n.to_string(),
        RawPrice::Text(s) => s,
    };
    Decimal::from_str(text.trim())
        .map_err(|e| serde::de::Error::custom(format!("invalid price {:?}: {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_product() {
        let json = r##"{
            "id": "p1",
            "name": "Tee",
            "price": "19.99",
            "isFeatured": true,
            "category": { "id": "c1", "name": "Shirts" },
            "color": { "id": "col1", "name": "Blue", "value": "#0000ff" },
            "size": { "id": "s1", "name": "Medium", "value": "M" },
            "images": [{ "id": "i1", "url": "/a.jpg" }, { "id": "i2", "url": "/b.jpg" }]
        }"##;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, "p1");
        assert_eq!(product.price, Decimal::new(1999, 2));
        assert!(product.is_featured);
        assert!(!product.is_archived);
        assert_eq!(product.category.as_ref().map(|c| c.name.as_str()), Some("Shirts"));
        assert_eq!(product.color.name, "Blue");
        assert_eq!(product.size.value, "M");
        assert_eq!(product.images.len(), 2);
    }

    #[test]
    fn test_numeric_price_and_missing_images() {
        let json = r#"{
            "id": "p2",
            "name": "Cap",
            "price": 5,
            "color": { "name": "Red" },
            "size": { "value": "OS" }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.price, Decimal::from(5));
        assert!(product.images.is_empty());
        assert_eq!(product.thumbnail(), Thumbnail::Placeholder);
    }

    #[test]
    fn test_float_price_keeps_decimal_digits() {
        let json = r#"{
            "id": "p5",
            "name": "Socks",
            "price": 1.005,
            "color": { "name": "White" },
            "size": { "value": "S" }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Decimal::new(1005, 3));
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let json = r#"{
            "id": "p3",
            "name": "Bad",
            "price": "cheap",
            "color": { "name": "Red" },
            "size": { "value": "S" }
        }"#;

        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err.to_string().contains("invalid price"));
    }

    #[test]
    fn test_thumbnail_uses_first_image() {
        let json = r#"{
            "id": "p4",
            "name": "Hoodie",
            "price": 49.5,
            "color": { "name": "Grey" },
            "size": { "value": "L" },
            "images": [{ "url": "/first.jpg" }, { "url": "/second.jpg" }]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.thumbnail(), Thumbnail::Image("/first.jpg".to_string()));
    }
}
