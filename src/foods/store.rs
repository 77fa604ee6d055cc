use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::foods::dto::FoodRecord;
use crate::foods::normalize::{normalize_food, resolve_id, resolve_name, RawFoodRecord};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unrecognized dataset shape (expected a list, `foods` or `FoundationFoods`)")]
    UnrecognizedShape,
}

/// Pulls the record list out of one of the accepted top-level shapes.
pub fn extract_records(doc: Value) -> Result<Vec<RawFoodRecord>, LoadError> {
    match doc {
        Value::Array(items) => Ok(items),
        Value::Object(mut obj) => {
            for key in ["foods", "FoundationFoods"] {
                if let Some(Value::Array(items)) = obj.remove(key) {
                    return Ok(items);
                }
            }
            Err(LoadError::UnrecognizedShape)
        }
        _ => Err(LoadError::UnrecognizedShape),
    }
}

/// In-memory food collection loaded once from a USDA FDC JSON file.
///
/// Raw records are kept as loaded and normalized on every read.
#[derive(Debug, Default)]
pub struct JsonFoodStore {
    foods: Vec<RawFoodRecord>,
}

impl JsonFoodStore {
    pub fn from_records(foods: Vec<RawFoodRecord>) -> Self {
        Self { foods }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: Value = serde_json::from_str(&text)?;
        let foods = extract_records(doc)?;
        info!(path = %path.display(), count = foods.len(), "food dataset loaded");
        Ok(Self { foods })
    }

    /// Like [`JsonFoodStore::load`], but any failure leaves the store empty.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "food dataset unavailable; serving empty store");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Foods whose lower-cased name contains every query word.
    /// Stops at `limit` matches in storage order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<FoodRecord> {
        let query = query.to_lowercase();
        let words: Vec<&str> = query.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        self.foods
            .iter()
            .filter(|raw| {
                let name = resolve_name(raw).unwrap_or_default().to_lowercase();
                words.iter().all(|w| name.contains(w))
            })
            .take(limit)
            .map(normalize_food)
            .collect()
    }

    pub fn get_by_id(&self, id: i64) -> Option<FoodRecord> {
        self.foods
            .iter()
            .find(|raw| resolve_id(raw) == Some(id))
            .map(normalize_food)
    }

    pub fn get_all(&self, limit: usize) -> Vec<FoodRecord> {
        self.foods.iter().take(limit).map(normalize_food).collect()
    }
}
