//! Content model: plain values describing what form rows display.
//!
//! Nothing here knows about rows, cells or styling. Rows are fed with these
//! values and render them through their own labels.

mod customer;

pub use customer::{Comment, CustomerViewModel, LoadError};

use serde::{Deserialize, Serialize};

/// One titled value of a two-column row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnContent {
    pub title: String,
    pub value: String,
}

impl ColumnContent {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// A single purchased product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub price: String,
    pub description: String,
}

impl Product {
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

/// One purchase record: summary fields plus the products bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseHistoryContent {
    pub date: String,
    pub total_price: String,
    pub store: String,
    /// May be empty.
    #[serde(default)]
    pub products: Vec<Product>,
}
