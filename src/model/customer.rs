//! Customer view model and its loaders.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Product, PurchaseHistoryContent};

/// Error types that can occur while loading a view model.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// I/O error while reading the file.
    Io(String),
    /// The file is not a valid customer document.
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

/// A dated free-text note about the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub date: String,
    pub value: String,
}

impl Comment {
    pub fn new(date: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            value: value.into(),
        }
    }
}

/// Everything the profile screen shows about one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerViewModel {
    /// Form of address ("MR", "MS"). Rendered as its own row when present.
    #[serde(default)]
    pub title: Option<String>,
    pub first_name: String,
    pub surname: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub purchases: Vec<PurchaseHistoryContent>,
}

impl CustomerViewModel {
    /// The demo customer shown when no file is given.
    pub fn sample() -> Self {
        let watches = vec![
            Product::new(
                "TAG HEUER CARRERA",
                "5,630,00€",
                "43 MM BLUE DIAL WITH STEEL STRAP",
            ),
            Product::new(
                "TAG HEUER FORMULA 1",
                "4,930,00€",
                "43 MM BLACK DIAL WITH STEEL STRAP",
            ),
        ];

        let purchase = |date: &str, total: &str, store: &str, products: &[Product]| {
            PurchaseHistoryContent {
                date: date.to_string(),
                total_price: total.to_string(),
                store: store.to_string(),
                products: products.to_vec(),
            }
        };

        Self {
            title: Some("MR".to_string()),
            first_name: "TOM".to_string(),
            surname: "ARNOLD".to_string(),
            comments: vec![
                Comment::new("10/7/2018", "He is a property developer"),
                Comment::new(
                    "10/4/2018",
                    "He will be on holiday Nov 2017 - Jan 2018 -- loves brown leather",
                ),
            ],
            purchases: vec![
                purchase("17/09/2012", "120.2€", "There", &watches),
                purchase("12/12/2012", "1000.0€", "There", &watches),
                purchase("13/01/2014", "500.0€", "Here", &[]),
                purchase("17/09/2016", "420.90€", "There", &watches),
            ],
        }
    }

    /// Parses a customer document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        serde_json::from_str(text).map_err(|e| LoadError::Parse(e.to_string()))
    }

    /// Reads and parses a customer document from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| LoadError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }
}
