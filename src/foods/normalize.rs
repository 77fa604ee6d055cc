//! Conversion of schema-variable USDA FDC records into [`FoodRecord`]s.
//!
//! Every logical field is read through an ordered list of alternate keys.
//! Normalization never fails: missing or malformed data falls back to
//! defaults (`0` id, `"Unknown Food"`, zeroed nutrients).

use std::collections::HashMap;

use serde_json::Value;

use crate::foods::dto::{FoodRecord, ServingOption};
use crate::foods::nutrients::NUTRIENT_CODES;

/// A food exactly as it appears in the dataset.
pub type RawFoodRecord = Value;

const ID_KEYS: [&str; 3] = ["fdcId", "fdc_id", "id"];
const NAME_KEYS: [&str; 2] = ["description", "name"];
const PORTION_LABEL_KEYS: [&str; 3] = ["label", "portionDescription", "modifier"];

const UNKNOWN_FOOD: &str = "Unknown Food";

pub(crate) fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub(crate) fn as_integer(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Whether a field counts as present for fallback purposes: `null`, `false`,
/// zero and the empty string all defer to the next key.
fn is_set(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn first_text<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| raw.get(*k).and_then(Value::as_str))
        .find(|s| !s.is_empty())
}

/// Id by `fdcId`, then `fdc_id`, then `id`. A zero id defers to the next key.
pub fn resolve_id(raw: &RawFoodRecord) -> Option<i64> {
    ID_KEYS
        .iter()
        .filter_map(|k| raw.get(*k))
        .filter(|v| is_set(v))
        .find_map(as_integer)
}

/// Name by `description`, then `name`.
pub fn resolve_name(raw: &RawFoodRecord) -> Option<&str> {
    first_text(raw, &NAME_KEYS)
}

/// Nutrient number of one `foodNutrients` entry:
/// `nutrientId`, then `nutrient.id`, then `nutrient.number`.
fn nutrient_code(entry: &Value) -> Option<i64> {
    entry
        .get("nutrientId")
        .and_then(as_integer)
        .or_else(|| entry.pointer("/nutrient/id").and_then(as_integer))
        .or_else(|| entry.pointer("/nutrient/number").and_then(as_integer))
}

/// `amount` unless it is missing, null or zero, otherwise `value`.
pub(crate) fn nutrient_amount(entry: &Value) -> f64 {
    entry
        .get("amount")
        .filter(|v| is_set(v))
        .or_else(|| entry.get("value"))
        .and_then(as_number)
        .unwrap_or(0.0)
}

pub fn normalize_food(raw: &RawFoodRecord) -> FoodRecord {
    let id = resolve_id(raw).unwrap_or(0);
    let name = resolve_name(raw).unwrap_or(UNKNOWN_FOOD);
    let mut food = FoodRecord::new(id, name);

    // first entry per code wins
    let mut amounts: HashMap<i64, f64> = HashMap::new();
    if let Some(entries) = raw.get("foodNutrients").and_then(Value::as_array) {
        for entry in entries {
            if let Some(code) = nutrient_code(entry) {
                amounts
                    .entry(code)
                    .or_insert_with(|| nutrient_amount(entry));
            }
        }
    }
    for (code, nutrient) in NUTRIENT_CODES {
        if let Some(&amount) = amounts.get(&i64::from(code)) {
            food.nutrients.set(nutrient, amount);
        }
    }

    if let Some(portions) = raw.get("foodPortions").and_then(Value::as_array) {
        food.serving_options
            .extend(portions.iter().map(portion_option));
    }

    food
}

/// Amount as written in the dataset, so `2.0` and `2` label differently.
fn amount_text(raw: Option<&Value>, parsed: f64) -> String {
    match raw {
        Some(Value::Number(n)) => n.to_string(),
        _ => parsed.to_string(),
    }
}

fn portion_option(portion: &Value) -> ServingOption {
    let label = first_text(portion, &PORTION_LABEL_KEYS).unwrap_or("serving");
    let amount = portion.get("amount").and_then(as_number).unwrap_or(1.0);
    let gram_weight = portion
        .get("gramWeight")
        .and_then(as_number)
        .unwrap_or(100.0);
    let grams_per_unit = if amount > 0.0 {
        gram_weight / amount
    } else {
        gram_weight
    };
    let text = |key: &str| {
        portion
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    ServingOption {
        label: if amount != 1.0 {
            format!("{} {}", amount_text(portion.get("amount"), amount), label)
        } else {
            label.to_string()
        },
        unit: label.to_string(),
        grams_per_unit,
        gram_weight,
        amount: Some(amount),
        modifier: Some(text("modifier")),
        description: Some(text("portionDescription")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foods::nutrients::Nutrient;
    use serde_json::json;

    #[test]
    fn record_without_nutrients_is_zeroed() {
        let food = normalize_food(&json!({ "fdcId": 1, "description": "Water" }));
        assert_eq!(food.nutrients.iter().count(), 22);
        assert!(food.nutrients.iter().all(|(_, v)| v == 0.0));
        assert_eq!(food.serving_options.len(), 4);
        assert_eq!(food.unit, "100 g");
    }

    #[test]
    fn empty_record_gets_defaults() {
        let food = normalize_food(&json!({}));
        assert_eq!(food.id, 0);
        assert_eq!(food.name, "Unknown Food");

        let food = normalize_food(&json!("not an object"));
        assert_eq!(food.id, 0);
        assert_eq!(food.serving_options.len(), 4);
    }

    #[test]
    fn id_and_name_follow_priority() {
        let food = normalize_food(&json!({
            "id": 3, "fdc_id": 2, "fdcId": 1,
            "name": "second", "description": "first"
        }));
        assert_eq!(food.id, 1);
        assert_eq!(food.name, "first");

        let food = normalize_food(&json!({ "id": 3, "fdc_id": "2", "name": "only name" }));
        assert_eq!(food.id, 2);
        assert_eq!(food.name, "only name");
    }

    #[test]
    fn nested_number_codes_match_direct_ids() {
        let direct = normalize_food(&json!({
            "fdcId": 1,
            "foodNutrients": [
                { "nutrientId": 303, "amount": 2.7 },
                { "nutrientId": 203, "amount": 2.9 }
            ]
        }));
        let nested = normalize_food(&json!({
            "fdcId": 1,
            "foodNutrients": [
                { "nutrient": { "number": "303", "name": "Iron, Fe" }, "amount": 2.7 },
                { "nutrient": { "number": "203" }, "amount": 2.9 }
            ]
        }));
        assert_eq!(direct.nutrients, nested.nutrients);
        assert_eq!(nested.nutrients.get(Nutrient::Iron), 2.7);
        assert_eq!(nested.nutrients.get(Nutrient::Protein), 2.9);
    }

    #[test]
    fn nutrient_entries_tolerate_odd_shapes() {
        let food = normalize_food(&json!({
            "foodNutrients": [
                { "nutrient": { "id": 208 }, "value": 23 },
                { "nutrient": { "number": "n/a" }, "amount": 99.0 },
                { "nutrientId": 301, "amount": null, "value": 12.5 },
                { "nutrientId": 306, "amount": "558" },
                { "nutrientId": 307, "amount": "lots" },
                { "nutrientId": 303, "amount": 1.0 },
                { "nutrientId": 303, "amount": 5.0 },
                42
            ]
        }));
        assert_eq!(food.nutrients.get(Nutrient::Calories), 23.0);
        assert_eq!(food.nutrients.get(Nutrient::Calcium), 12.5);
        assert_eq!(food.nutrients.get(Nutrient::Potassium), 558.0);
        assert_eq!(food.nutrients.get(Nutrient::Sodium), 0.0);
        assert_eq!(food.nutrients.get(Nutrient::Iron), 1.0);
    }

    #[test]
    fn portions_are_appended_in_order() {
        let food = normalize_food(&json!({
            "fdcId": 7,
            "description": "Spinach, raw",
            "foodPortions": [
                { "amount": 1.0, "modifier": "cup", "gramWeight": 30.0 },
                { "amount": 2.0, "portionDescription": "leaves", "modifier": "leaf", "gramWeight": 20.0 },
                { "amount": 0, "label": "bunch", "gramWeight": 340.0 },
                {}
            ]
        }));
        let opts = &food.serving_options;
        assert_eq!(opts.len(), 8);
        assert_eq!(opts[3].label, "serving (100g)");

        assert_eq!(opts[4].label, "cup");
        assert_eq!(opts[4].grams_per_unit, 30.0);
        assert_eq!(opts[4].modifier.as_deref(), Some("cup"));
        assert_eq!(opts[4].description.as_deref(), Some(""));

        assert_eq!(opts[5].label, "2.0 leaves");
        assert_eq!(opts[5].unit, "leaves");
        assert_eq!(opts[5].grams_per_unit, 10.0);
        assert_eq!(opts[5].description.as_deref(), Some("leaves"));

        assert_eq!(opts[6].label, "0 bunch");
        assert_eq!(opts[6].grams_per_unit, 340.0);

        assert_eq!(opts[7].label, "serving");
        assert_eq!(opts[7].gram_weight, 100.0);
        assert_eq!(opts[7].amount, Some(1.0));
    }

    #[test]
    fn portion_label_keeps_dataset_number_form() {
        let food = normalize_food(&json!({
            "foodPortions": [
                { "amount": 2.0, "modifier": "cup", "gramWeight": 60.0 },
                { "amount": 2, "modifier": "cup", "gramWeight": 60.0 },
                { "amount": "1.5", "modifier": "slice", "gramWeight": 30.0 },
                { "amount": 0.5, "modifier": "cup", "gramWeight": 15.0 }
            ]
        }));
        let labels: Vec<&str> = food.serving_options[4..]
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, ["2.0 cup", "2 cup", "1.5 slice", "0.5 cup"]);
        assert_eq!(food.serving_options[4].grams_per_unit, 30.0);
    }

    #[test]
    fn zero_values_defer_to_the_next_key() {
        let food = normalize_food(&json!({ "fdcId": 0, "fdc_id": 0, "id": 42 }));
        assert_eq!(food.id, 42);
        assert_eq!(normalize_food(&json!({ "fdcId": 0 })).id, 0);

        let food = normalize_food(&json!({
            "foodNutrients": [
                { "nutrientId": 303, "amount": 0, "value": 3.5 },
                { "nutrientId": 203, "amount": 0.0 },
                { "nutrientId": 204, "amount": "", "value": "4.2" }
            ]
        }));
        assert_eq!(food.nutrients.get(Nutrient::Iron), 3.5);
        assert_eq!(food.nutrients.get(Nutrient::Protein), 0.0);
        assert_eq!(food.nutrients.get(Nutrient::Fat), 4.2);
    }
}
