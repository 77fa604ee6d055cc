use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical nutrient carried by every food record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    // Macronutrients
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sugar,
    // Minerals
    Calcium,
    Iron,
    Magnesium,
    Phosphorus,
    Potassium,
    Sodium,
    Zinc,
    // Vitamins
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    VitaminB6,
    VitaminB12,
    Folate,
    Niacin,
}

/// USDA legacy nutrient number -> canonical nutrient.
pub const NUTRIENT_CODES: [(u32, Nutrient); 22] = [
    (208, Nutrient::Calories),
    (203, Nutrient::Protein),
    (205, Nutrient::Carbs),
    (204, Nutrient::Fat),
    (291, Nutrient::Fiber),
    (269, Nutrient::Sugar),
    (301, Nutrient::Calcium),
    (303, Nutrient::Iron),
    (304, Nutrient::Magnesium),
    (305, Nutrient::Phosphorus),
    (306, Nutrient::Potassium),
    (307, Nutrient::Sodium),
    (309, Nutrient::Zinc),
    (320, Nutrient::VitaminA),
    (401, Nutrient::VitaminC),
    (328, Nutrient::VitaminD),
    (323, Nutrient::VitaminE),
    (430, Nutrient::VitaminK),
    (415, Nutrient::VitaminB6),
    (418, Nutrient::VitaminB12),
    (417, Nutrient::Folate),
    (406, Nutrient::Niacin),
];

impl Nutrient {
    pub fn all() -> impl Iterator<Item = Nutrient> {
        NUTRIENT_CODES.iter().map(|&(_, n)| n)
    }

    pub fn from_code(code: u32) -> Option<Nutrient> {
        NUTRIENT_CODES
            .iter()
            .find(|&&(c, _)| c == code)
            .map(|&(_, n)| n)
    }

    pub fn code(self) -> u32 {
        NUTRIENT_CODES
            .iter()
            .find(|&&(_, n)| n == self)
            .map(|&(c, _)| c)
            .unwrap_or_default()
    }

    /// Wire name, e.g. `vitaminB12`.
    pub fn name(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
            Nutrient::Fiber => "fiber",
            Nutrient::Sugar => "sugar",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Potassium => "potassium",
            Nutrient::Sodium => "sodium",
            Nutrient::Zinc => "zinc",
            Nutrient::VitaminA => "vitaminA",
            Nutrient::VitaminC => "vitaminC",
            Nutrient::VitaminD => "vitaminD",
            Nutrient::VitaminE => "vitaminE",
            Nutrient::VitaminK => "vitaminK",
            Nutrient::VitaminB6 => "vitaminB6",
            Nutrient::VitaminB12 => "vitaminB12",
            Nutrient::Folate => "folate",
            Nutrient::Niacin => "niacin",
        }
    }
}

/// Per-100 g amounts for all 22 canonical nutrients.
///
/// Always holds every key; values default to 0.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Nutrients(BTreeMap<Nutrient, f64>);

impl Default for Nutrients {
    fn default() -> Self {
        Self(Nutrient::all().map(|n| (n, 0.0)).collect())
    }
}

impl Nutrients {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.0.get(&nutrient).copied().unwrap_or_default()
    }

    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        self.0.insert(nutrient, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(&n, &v)| (n, v))
    }

    pub fn scaled(&self, factor: f64) -> Nutrients {
        Self(self.0.iter().map(|(&n, &v)| (n, v * factor)).collect())
    }

    pub fn accumulate(&mut self, other: &Nutrients) {
        for (n, v) in other.iter() {
            *self.0.entry(n).or_default() += v;
        }
    }
}
