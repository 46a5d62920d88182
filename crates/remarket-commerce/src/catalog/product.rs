//! Catalog product type.

use crate::ids::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// A catalog entry for a refurbished device.
///
/// Products carry no price of their own; prices live on seller listings,
/// several of which may reference the same product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Brand name.
    pub brand: String,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URLs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Owning category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// ISO-8601 creation timestamp from the backend.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    /// The primary image, if any.
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Image at a gallery index, falling back to the primary image.
    pub fn image_at(&self, index: usize) -> Option<&str> {
        self.images
            .get(index)
            .or_else(|| self.images.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(images: &[&str]) -> Product {
        Product {
            id: ProductId::new("1"),
            title: "iPhone 13".to_string(),
            brand: "Apple".to_string(),
            description: None,
            images: images.iter().map(|s| s.to_string()).collect(),
            category_id: None,
            created_at: None,
        }
    }

    #[test]
    fn test_main_image() {
        assert_eq!(product(&["a.jpg", "b.jpg"]).main_image(), Some("a.jpg"));
        assert_eq!(product(&[]).main_image(), None);
    }

    #[test]
    fn test_image_at_falls_back_to_first() {
        let p = product(&["a.jpg", "b.jpg"]);
        assert_eq!(p.image_at(1), Some("b.jpg"));
        assert_eq!(p.image_at(9), Some("a.jpg"));
        assert_eq!(product(&[]).image_at(0), None);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id": 7, "title": "Pixel 8", "brand": "Google", "categoryId": 3}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_str(), "7");
        assert_eq!(p.category_id.unwrap().as_str(), "3");
        assert!(p.images.is_empty());
    }
}
