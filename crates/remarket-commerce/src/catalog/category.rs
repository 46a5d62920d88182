//! Category type for catalog navigation.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Category image URL.
    #[serde(default)]
    pub image_url: Option<String>,
}
