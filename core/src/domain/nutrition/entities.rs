use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregated nutrient values for a recipe. Derived, never persisted;
/// recomputed from the line items on every read. No rounding is applied
/// here; display formatting is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct NutritionTotals {
    pub calories: f64,
    pub proteins: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    pub fiber: f64,
    pub sodium: f64,
}

impl NutritionTotals {
    /// Field values in fixed display order, with their labels and units.
    /// Consumers (serializers, API) rely on this ordering.
    pub fn entries(&self) -> [(&'static str, f64, &'static str); 6] {
        [
            ("calories", self.calories, "kcal"),
            ("proteins", self.proteins, "g"),
            ("carbohydrates", self.carbohydrates, "g"),
            ("fats", self.fats, "g"),
            ("fiber", self.fiber, "g"),
            ("sodium", self.sodium, "mg"),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionSummary {
    pub total: NutritionTotals,
    pub per_serving: NutritionTotals,
}
