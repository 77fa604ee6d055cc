use lazy_static::lazy_static;
use serde::Serialize;

use crate::foods::nutrients::Nutrient;

/// One ingredient of a template: a food search plus how many 100 g units to use.
#[derive(Debug, Clone, Serialize)]
pub struct FoodQuery {
    pub query: String,
    pub multiplier: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MealTemplate {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub foods: Vec<FoodQuery>,
    pub nutrients: Vec<Nutrient>,
}

impl MealTemplate {
    fn new(
        id: u32,
        name: &str,
        category: &str,
        foods: &[(&str, f64)],
        nutrients: &[Nutrient],
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            foods: foods
                .iter()
                .map(|&(query, multiplier)| FoodQuery {
                    query: query.into(),
                    multiplier,
                    unit: "100 g".into(),
                })
                .collect(),
            nutrients: nutrients.to_vec(),
        }
    }
}

lazy_static! {
    pub static ref MEAL_CATALOG: Vec<MealTemplate> = {
        use Nutrient::*;
        vec![
            MealTemplate::new(
                1,
                "Spinach Power Salad",
                "Salad",
                &[("spinach raw", 2.0), ("chicken breast", 1.5), ("olive oil", 0.3)],
                &[Iron, VitaminA, VitaminK, Protein, Magnesium],
            ),
            MealTemplate::new(
                2,
                "Salmon & Sweet Potato",
                "Main Course",
                &[("salmon", 1.5), ("sweet potato", 2.0), ("broccoli", 1.0)],
                &[Protein, VitaminD, VitaminB12, Potassium, VitaminC],
            ),
            MealTemplate::new(
                3,
                "Greek Yogurt Parfait",
                "Breakfast",
                &[("yogurt greek", 2.0), ("blueberries", 1.0), ("almonds", 0.3)],
                &[Protein, Calcium, VitaminB12, VitaminE],
            ),
            MealTemplate::new(
                4,
                "Lentil Curry Bowl",
                "Main Course",
                &[("lentils cooked", 2.0), ("rice brown", 1.5), ("spinach", 1.0)],
                &[Protein, Iron, Folate, Fiber, Magnesium],
            ),
            MealTemplate::new(
                5,
                "Egg & Avocado Toast",
                "Breakfast",
                &[("egg", 2.0), ("avocado", 1.0), ("bread whole wheat", 1.0)],
                &[Protein, VitaminB12, Folate, VitaminE, Fat],
            ),
            MealTemplate::new(
                6,
                "Beef & Quinoa Bowl",
                "Main Course",
                &[("beef lean", 1.5), ("quinoa cooked", 1.5), ("kale", 1.0)],
                &[Protein, Iron, Zinc, VitaminB12, Magnesium],
            ),
            MealTemplate::new(
                7,
                "Tuna Salad Wrap",
                "Lunch",
                &[("tuna", 1.5), ("lettuce", 1.0), ("tortilla whole wheat", 1.0)],
                &[Protein, VitaminD, VitaminB12, Niacin],
            ),
            MealTemplate::new(
                8,
                "Oatmeal with Berries",
                "Breakfast",
                &[("oatmeal", 1.5), ("strawberries", 1.0), ("milk", 1.0)],
                &[Fiber, Calcium, VitaminC, Iron],
            ),
        ]
    };
}
