//! Paginated-page wire shapes.
//!
//! Collection endpoints return either a bare JSON array or a Spring-style
//! page wrapper (`{content: [...], totalElements, totalPages, ...}`),
//! depending on the endpoint and backend version. Callers must handle both;
//! an unrecognized shape normalizes to an empty collection rather than an
//! error.

use serde::Deserialize;
use tracing::warn;

/// A page of results from a paginated endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Total items across all pages.
    #[serde(default)]
    pub total_elements: u64,
    /// Total page count.
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index.
    #[serde(default)]
    pub number: u32,
    /// Page size.
    #[serde(default)]
    pub size: u32,
}

impl<T> Page<T> {
    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }

    /// Map the page content, keeping pagination metadata. Used to convert
    /// wire DTOs into domain types without losing the page cursor.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
        }
    }
}

/// A collection response that may arrive as an array, a page wrapper, or
/// something unexpected.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Paged<T> {
    /// Page-wrapper shape.
    Page(Page<T>),
    /// Bare array shape.
    Items(Vec<T>),
    /// Anything else — normalized to empty.
    Other(serde_json::Value),
}

impl<T> Paged<T> {
    /// Normalize to a flat item list. An unrecognized shape logs a warning
    /// and yields an empty list, never an error.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Paged::Page(page) => page.content,
            Paged::Items(items) => items,
            Paged::Other(value) => {
                warn!(shape = %shape_of(&value), "unrecognized collection shape, treating as empty");
                Vec::new()
            }
        }
    }
}

fn shape_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
