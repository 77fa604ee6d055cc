//! Dataset preparation for the JSON backend: drops branded and
//! restaurant-chain foods and strips records down to the fields and
//! nutrients the service reads.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{json, Map, Value};

use crate::foods::normalize::{as_integer, nutrient_amount, resolve_id, resolve_name};
use crate::foods::nutrients::Nutrient;
use crate::foods::store::{extract_records, LoadError};

const CHAIN_PATTERNS: &[&str] = &[
    "PIZZA HUT", "PAPA JOHN", "PAPAJOHNS", "DOMINO", "MCDONALD", "BURGER KING",
    "WENDY", "KFC", "TACO BELL", "SUBWAY", "STARBUCKS", "CHIPOTLE", "POPEYES",
    "APPLEBEE", "P.F. CHANG", "P F CHANG", "PANERA", "IHOP", "DUNKIN",
    "SHAKE SHACK", "CARLS JR", "CARL'S JR", "SONIC", "JACK IN THE BOX",
    "PIZZERIA", "RESTAURANT", "BRANDED", "COMMERCIAL",
];

const PORTION_KEYS: [&str; 5] = ["label", "portionDescription", "modifier", "amount", "gramWeight"];
const BRAND_KEYS: [&str; 3] = ["brandOwner", "brand_owner", "brand"];

lazy_static! {
    static ref CHAIN_RE: Regex = {
        let alternation = CHAIN_PATTERNS
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!("(?i){alternation}")).unwrap()
    };
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrimSummary {
    pub kept: usize,
    pub removed: usize,
}

fn text<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key).and_then(Value::as_str)
}

/// `foodCategory` is either a plain string or `{ "description": ... }`.
fn category(raw: &Value) -> Option<&str> {
    text(raw, "foodCategory").or_else(|| {
        raw.pointer("/foodCategory/description")
            .and_then(Value::as_str)
    })
}

pub fn is_chain_or_branded(raw: &Value) -> bool {
    let data_type = text(raw, "dataType").unwrap_or_default();
    if data_type.to_lowercase().contains("branded") {
        return true;
    }
    let brand = BRAND_KEYS.iter().find_map(|k| text(raw, k));
    [resolve_name(raw), brand, Some(data_type), category(raw)]
        .into_iter()
        .flatten()
        .any(|s| CHAIN_RE.is_match(s))
}

/// Legacy nutrient number of an entry: `nutrient.number`, then a top-level
/// `number`, then `nutrientId`. FDC's own `nutrient.id` is never consulted.
fn legacy_code(entry: &Value) -> Option<Nutrient> {
    [entry.pointer("/nutrient/number"), entry.get("number"), entry.get("nutrientId")]
        .into_iter()
        .flatten()
        .find(|v| !v.is_null())
        .and_then(as_integer)
        .and_then(|code| u32::try_from(code).ok())
        .and_then(Nutrient::from_code)
}

pub fn trim_record(raw: &Value) -> Value {
    let portions: Vec<Value> = raw
        .get("foodPortions")
        .and_then(Value::as_array)
        .map(|ps| {
            ps.iter()
                .map(|p| {
                    let kept: Map<String, Value> = PORTION_KEYS
                        .iter()
                        .filter_map(|k| p.get(*k).map(|v| (k.to_string(), v.clone())))
                        .collect();
                    Value::Object(kept)
                })
                .collect()
        })
        .unwrap_or_default();

    let nutrients: Vec<Value> = raw
        .get("foodNutrients")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    let nutrient = legacy_code(entry)?;
                    Some(json!({
                        "nutrient": {
                            "number": nutrient.code().to_string(),
                            "name": entry.pointer("/nutrient/name").cloned().unwrap_or(Value::Null),
                        },
                        "amount": nutrient_amount(entry),
                    }))
                })
                .collect()
        })
        .unwrap_or_default();

    json!({
        "fdcId": resolve_id(raw),
        "description": resolve_name(raw).unwrap_or("Unknown Food"),
        "foodCategory": category(raw),
        "foodPortions": portions,
        "foodNutrients": nutrients,
    })
}

/// Trims a whole dataset document into `{"foods": [...]}`.
pub fn trim_dataset(doc: Value) -> Result<(Value, TrimSummary), LoadError> {
    let records = extract_records(doc)?;
    let total = records.len();
    let foods: Vec<Value> = records
        .iter()
        .filter(|raw| !is_chain_or_branded(raw))
        .map(trim_record)
        .collect();
    let summary = TrimSummary {
        kept: foods.len(),
        removed: total - foods.len(),
    };
    Ok((json!({ "foods": foods }), summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foods::normalize::normalize_food;

    #[test]
    fn chains_and_branded_foods_are_detected() {
        assert!(is_chain_or_branded(&json!({ "description": "PIZZA HUT 12\" Pepperoni" })));
        assert!(is_chain_or_branded(&json!({ "description": "Burger", "brandOwner": "McDonald's" })));
        assert!(is_chain_or_branded(&json!({ "description": "Cereal", "dataType": "Branded" })));
        assert!(is_chain_or_branded(&json!({
            "description": "Fries",
            "foodCategory": { "description": "Restaurant Foods" }
        })));
        assert!(!is_chain_or_branded(&json!({
            "description": "Spinach, raw",
            "dataType": "Foundation",
            "foodCategory": { "description": "Vegetables and Vegetable Products" }
        })));
    }

    #[test]
    fn trimmed_record_keeps_only_canonical_nutrients() {
        let raw = json!({
            "fdcId": 168462,
            "description": "Spinach, raw",
            "dataType": "SR Legacy",
            "foodCategory": { "description": "Vegetables" },
            "foodPortions": [{ "amount": 1.0, "modifier": "cup", "gramWeight": 30.0, "id": 99 }],
            "foodNutrients": [
                { "nutrient": { "id": 1089, "number": "303", "name": "Iron, Fe" }, "amount": 2.71 },
                { "nutrient": { "id": 1003, "number": "203", "name": "Protein" }, "amount": 2.86 },
                { "number": "208", "amount": 23.0 },
                { "nutrient": { "id": 1051, "number": "255", "name": "Water" }, "amount": 91.4 }
            ]
        });

        let trimmed = trim_record(&raw);
        assert_eq!(trimmed["fdcId"], 168462);
        assert_eq!(trimmed["foodCategory"], "Vegetables");
        assert_eq!(trimmed["foodPortions"][0], json!({ "amount": 1.0, "modifier": "cup", "gramWeight": 30.0 }));
        assert_eq!(trimmed["foodNutrients"].as_array().unwrap().len(), 3);
        assert_eq!(trimmed["foodNutrients"][0], json!({
            "nutrient": { "number": "303", "name": "Iron, Fe" },
            "amount": 2.71
        }));

        let food = normalize_food(&trimmed);
        assert_eq!(food.nutrients.get(Nutrient::Iron), 2.71);
        assert_eq!(food.nutrients.get(Nutrient::Protein), 2.86);
        assert_eq!(food.nutrients.get(Nutrient::Calories), 23.0);
        assert_eq!(food.serving_options.len(), 5);
    }

    #[test]
    fn dataset_summary_counts_removed_records() {
        let doc = json!({ "FoundationFoods": [
            { "fdcId": 1, "description": "Kale, raw" },
            { "fdcId": 2, "description": "Taco", "brandOwner": "Taco Bell" },
            { "fdcId": 3, "description": "Lentils, cooked" }
        ]});
        let (out, summary) = trim_dataset(doc).unwrap();
        assert_eq!(summary, TrimSummary { kept: 2, removed: 1 });
        assert_eq!(out["foods"][1]["description"], "Lentils, cooked");

        assert!(matches!(trim_dataset(json!(42)), Err(LoadError::UnrecognizedShape)));
    }
}
