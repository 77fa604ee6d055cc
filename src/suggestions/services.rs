use std::collections::HashSet;

use tracing::{debug, instrument, warn};

use crate::foods::{nutrients::Nutrients, repo::FoodRepository};
use crate::suggestions::catalog::MealTemplate;
use crate::suggestions::dto::{Deficiency, SuggestedFood, SuggestedMeal};

pub const MAX_SUGGESTIONS: usize = 8;

/// Lower-cased, trimmed allergen keywords. An empty string yields none;
/// a blank entry such as the tail of `"nuts,"` is kept and matches anything.
pub fn allergen_tokens(allergies: &str) -> Vec<String> {
    if allergies.is_empty() {
        return Vec::new();
    }
    allergies
        .to_lowercase()
        .split(',')
        .map(|t| t.trim().to_owned())
        .collect()
}

/// Crude whole-template match: any allergen appearing anywhere in the
/// serialized template (names, queries, nutrient list) excludes it.
fn contains_allergen(template: &MealTemplate, allergens: &[String]) -> bool {
    if allergens.is_empty() {
        return false;
    }
    let text = serde_json::to_string(template)
        .unwrap_or_default()
        .to_lowercase();
    allergens.iter().any(|a| text.contains(a.as_str()))
}

fn covered_count(template: &MealTemplate, wanted: &HashSet<String>) -> usize {
    template
        .nutrients
        .iter()
        .map(|n| n.name().to_lowercase())
        .filter(|n| wanted.contains(n))
        .collect::<HashSet<_>>()
        .len()
}

/// Ranks catalog meals by how many of the requested deficiencies they cover.
///
/// Each template food is resolved to the first search hit; foods with no hit
/// are skipped and templates with no resolved food are dropped. Ties keep
/// catalog order. At most [`MAX_SUGGESTIONS`] meals are returned.
#[instrument(skip_all, fields(deficiencies = deficiencies.len()))]
pub async fn suggest_meals(
    foods: &dyn FoodRepository,
    catalog: &[MealTemplate],
    deficiencies: &[Deficiency],
    allergies: Option<&str>,
) -> Vec<SuggestedMeal> {
    if deficiencies.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<String> = deficiencies
        .iter()
        .map(|d| d.nutrient.to_lowercase())
        .collect();
    let allergens = allergies.map(allergen_tokens).unwrap_or_default();

    let mut meals = Vec::new();
    for template in catalog {
        if contains_allergen(template, &allergens) {
            debug!(template = template.id, "excluded by allergen");
            continue;
        }

        let covered = covered_count(template, &wanted);
        if covered == 0 {
            continue;
        }

        let mut resolved = Vec::with_capacity(template.foods.len());
        let mut total = Nutrients::default();
        for item in &template.foods {
            let food = match foods.search(&item.query, 1).await {
                Ok(hits) => hits.into_iter().next(),
                Err(e) => {
                    warn!(error = %e, query = %item.query, "food search failed; skipping");
                    None
                }
            };
            let Some(food) = food else {
                continue;
            };

            let scaled = food.nutrients.scaled(item.multiplier);
            total.accumulate(&scaled);
            resolved.push(SuggestedFood {
                id: food.id,
                name: food.name,
                amount: item.multiplier,
                unit: item.unit.clone(),
                nutrients: scaled,
            });
        }

        if resolved.is_empty() {
            debug!(template = template.id, "no foods resolved");
            continue;
        }

        meals.push(SuggestedMeal {
            id: template.id,
            name: template.name.clone(),
            category: template.category.clone(),
            foods: resolved,
            total_nutrients: total,
            deficits_covered: covered,
            score: covered,
        });
    }

    // stable: equal scores keep catalog order
    meals.sort_by(|a, b| b.score.cmp(&a.score));
    meals.truncate(MAX_SUGGESTIONS);
    meals
}
