use serde::{Deserialize, Serialize};

use crate::foods::nutrients::Nutrients;

/// Canonical food returned by every lookup. Nutrient amounts are per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub id: i64,
    pub name: String,
    pub unit: String,
    pub serving_options: Vec<ServingOption>,
    #[serde(flatten)]
    pub nutrients: Nutrients,
}

impl FoodRecord {
    /// Record with zeroed nutrients and the four fixed serving options.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            unit: "100 g".into(),
            serving_options: ServingOption::fixed(),
            nutrients: Nutrients::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServingOption {
    pub label: String,
    pub unit: String,
    pub grams_per_unit: f64,
    pub gram_weight: f64,
    // dataset portions only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServingOption {
    fn simple(label: &str, unit: &str, grams: f64) -> Self {
        Self {
            label: label.into(),
            unit: unit.into(),
            grams_per_unit: grams,
            gram_weight: grams,
            amount: None,
            modifier: None,
            description: None,
        }
    }

    pub fn fixed() -> Vec<ServingOption> {
        vec![
            Self::simple("grams", "g", 1.0),
            Self::simple("oz", "oz", 28.35),
            Self::simple("lb", "lb", 453.59),
            Self::simple("serving (100g)", "serving", 100.0),
        ]
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}
fn default_search_limit() -> usize {
    20
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_list_limit")]
    pub limit: usize,
}
fn default_list_limit() -> usize {
    50
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub mode: &'static str,
    pub foods_loaded: bool,
    pub record_count: usize,
}
