use serde::{Deserialize, Serialize};

use crate::foods::nutrients::Nutrients;

/// Body of `POST /suggest-meals`.
#[derive(Debug, Default, Deserialize)]
pub struct SuggestMealsRequest {
    #[serde(default)]
    pub deficiencies: Vec<Deficiency>,
    /// Comma-separated allergen keywords, e.g. `"peanuts, shellfish"`.
    #[serde(default)]
    pub allergies: Option<String>,
}

/// A nutrient the caller is short on. Other fields the client sends are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Deficiency {
    pub nutrient: String,
}

impl Deficiency {
    pub fn new(nutrient: impl Into<String>) -> Self {
        Self {
            nutrient: nutrient.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFood {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub nutrients: Nutrients,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedMeal {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub foods: Vec<SuggestedFood>,
    pub total_nutrients: Nutrients,
    pub deficits_covered: usize,
    pub score: usize,
}
