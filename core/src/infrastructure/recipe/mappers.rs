use crate::{
    domain::{
        ingredient::entities::Ingredient,
        recipe::entities::{DifficultyLevel, Recipe, RecipeIngredient},
    },
    entity::{recipe_ingredients, recipe_steps, recipes},
};

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            category: model.category.clone(),
            unit: model.unit.clone(),
            correction_factor: model.correction_factor,
            cooking_index: model.cooking_index,
            servings: model.servings,
            serving_size: model.serving_size,
            household_measure: model.household_measure.clone(),
            preparation_type: model.preparation_type.clone(),
            difficulty_level: model
                .difficulty_level
                .as_deref()
                .and_then(DifficultyLevel::parse),
            preparation_time: model.preparation_time,
            validity_days: model.validity_days,
            monthly_production: model.monthly_production,
            contains_gluten: model.contains_gluten,
            allergens: serde_json::from_value(model.allergens.clone()).unwrap_or_default(),
            notes: model.notes.clone(),
            image_url: model.image_url.clone(),
            // Note: line items and steps are loaded separately.
            ingredients: Vec::new(),
            preparation_steps: Vec::new(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}

pub fn map_line_item(
    model: &recipe_ingredients::Model,
    ingredient: Option<Ingredient>,
) -> RecipeIngredient {
    RecipeIngredient {
        id: model.id,
        ingredient_id: model.ingredient_id,
        quantity: model.quantity,
        unit: model.unit.clone(),
        gross_weight: model.gross_weight,
        net_weight: model.net_weight,
        ingredient,
    }
}

pub fn map_steps(mut steps: Vec<recipe_steps::Model>) -> Vec<String> {
    steps.sort_by_key(|s| s.position);
    steps.into_iter().map(|s| s.instruction).collect()
}
