use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{generate_timestamp, generate_uuid_v7},
    ingredient::entities::Ingredient,
    recipe::value_objects::{RecipeIngredientInput, UpdateRecipeInput},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "easy" => Some(DifficultyLevel::Easy),
            "medium" => Some(DifficultyLevel::Medium),
            "hard" => Some(DifficultyLevel::Hard),
            _ => None,
        }
    }
}

/// One ingredient-quantity-unit entry within a recipe.
///
/// `ingredient` is the hydrated snapshot of the referenced record, resolved
/// at load time. The unit label is free-form and is NOT converted against
/// the ingredient's per-100 reference basis; quantities are assumed to be
/// entered in units commensurate with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub gross_weight: Option<f64>,
    pub net_weight: Option<f64>,
    pub ingredient: Option<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub correction_factor: f64,
    pub cooking_index: f64,
    pub servings: i32,
    pub serving_size: Option<f64>,
    pub household_measure: Option<String>,
    pub preparation_type: Option<String>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub preparation_time: Option<i32>,
    pub validity_days: Option<i32>,
    pub monthly_production: Option<i32>,
    pub contains_gluten: bool,
    pub allergens: Vec<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    /// Ordered line items; order is user-defined and preserved verbatim.
    pub ingredients: Vec<RecipeIngredient>,
    /// Ordered preparation steps; order is user-defined and preserved verbatim.
    pub preparation_steps: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub correction_factor: f64,
    pub cooking_index: f64,
    pub servings: i32,
    pub serving_size: Option<f64>,
    pub household_measure: Option<String>,
    pub preparation_type: Option<String>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub preparation_time: Option<i32>,
    pub validity_days: Option<i32>,
    pub monthly_production: Option<i32>,
    pub contains_gluten: bool,
    pub allergens: Vec<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub ingredients: Vec<RecipeIngredientInput>,
    pub preparation_steps: Vec<String>,
}

impl RecipeIngredient {
    fn from_input(input: RecipeIngredientInput) -> Self {
        Self {
            id: generate_uuid_v7(),
            ingredient_id: input.ingredient_id,
            quantity: input.quantity,
            unit: input.unit,
            gross_weight: input.gross_weight,
            net_weight: input.net_weight,
            // Resolved when the aggregate is loaded from the store.
            ingredient: None,
        }
    }
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            category: config.category,
            unit: config.unit,
            correction_factor: config.correction_factor,
            cooking_index: config.cooking_index,
            servings: config.servings,
            serving_size: config.serving_size,
            household_measure: config.household_measure,
            preparation_type: config.preparation_type,
            difficulty_level: config.difficulty_level,
            preparation_time: config.preparation_time,
            validity_days: config.validity_days,
            monthly_production: config.monthly_production,
            contains_gluten: config.contains_gluten,
            allergens: config.allergens,
            notes: config.notes,
            image_url: config.image_url,
            ingredients: config
                .ingredients
                .into_iter()
                .map(RecipeIngredient::from_input)
                .collect(),
            preparation_steps: config.preparation_steps,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replacement of the editable fields. Line items and steps are
    /// rebuilt from the input in the given order; identity and `created_at`
    /// never change.
    pub fn update(&mut self, input: UpdateRecipeInput) {
        let (now, _) = generate_timestamp();

        self.name = input.name;
        self.category = input.category;
        self.unit = input.unit;
        self.correction_factor = input.correction_factor;
        self.cooking_index = input.cooking_index;
        self.servings = input.servings;
        self.serving_size = input.serving_size;
        self.household_measure = input.household_measure;
        self.preparation_type = input.preparation_type;
        self.difficulty_level = input.difficulty_level;
        self.preparation_time = input.preparation_time;
        self.validity_days = input.validity_days;
        self.monthly_production = input.monthly_production;
        self.contains_gluten = input.contains_gluten;
        self.allergens = input.allergens;
        self.notes = input.notes;
        self.image_url = input.image_url;
        self.ingredients = input
            .ingredients
            .into_iter()
            .map(RecipeIngredient::from_input)
            .collect();
        self.preparation_steps = input.preparation_steps;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::value_objects::{RecipeIngredientInput, UpdateRecipeInput};

    fn line_item(quantity: f64) -> RecipeIngredientInput {
        RecipeIngredientInput {
            ingredient_id: Uuid::new_v4(),
            quantity,
            unit: "g".to_string(),
            gross_weight: None,
            net_weight: None,
        }
    }

    fn config() -> RecipeConfig {
        RecipeConfig {
            name: "Baked quinoa".to_string(),
            category: "Main".to_string(),
            unit: "kg".to_string(),
            correction_factor: 1.0,
            cooking_index: 1.0,
            servings: 2,
            serving_size: None,
            household_measure: None,
            preparation_type: None,
            difficulty_level: Some(DifficultyLevel::Easy),
            preparation_time: Some(30),
            validity_days: None,
            monthly_production: None,
            contains_gluten: false,
            allergens: vec![],
            notes: None,
            image_url: None,
            ingredients: vec![line_item(100.0), line_item(50.0)],
            preparation_steps: vec!["Rinse".to_string(), "Bake".to_string()],
        }
    }

    #[test]
    fn new_recipe_keeps_line_item_and_step_order() {
        let recipe = Recipe::new(config());

        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].quantity, 100.0);
        assert_eq!(recipe.ingredients[1].quantity, 50.0);
        assert_eq!(recipe.preparation_steps, vec!["Rinse", "Bake"]);
    }

    #[test]
    fn update_replaces_lists_without_touching_identity() {
        let mut recipe = Recipe::new(config());
        let id = recipe.id;
        let created_at = recipe.created_at;

        recipe.update(UpdateRecipeInput {
            name: "Baked quinoa v2".to_string(),
            category: "Main".to_string(),
            unit: "kg".to_string(),
            correction_factor: 1.2,
            cooking_index: 0.9,
            servings: 4,
            serving_size: None,
            household_measure: None,
            preparation_type: None,
            difficulty_level: None,
            preparation_time: None,
            validity_days: None,
            monthly_production: None,
            contains_gluten: false,
            allergens: vec![],
            notes: None,
            image_url: None,
            ingredients: vec![line_item(75.0)],
            preparation_steps: vec!["Bake".to_string()],
        });

        assert_eq!(recipe.id, id);
        assert_eq!(recipe.created_at, created_at);
        assert_eq!(recipe.name, "Baked quinoa v2");
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.preparation_steps, vec!["Bake"]);
    }

    #[test]
    fn difficulty_level_round_trips_through_labels() {
        for level in [
            DifficultyLevel::Easy,
            DifficultyLevel::Medium,
            DifficultyLevel::Hard,
        ] {
            assert_eq!(DifficultyLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(DifficultyLevel::parse("extreme"), None);
    }
}
