use ladle_core::domain::recipe::{
    entities::DifficultyLevel,
    value_objects::{CreateRecipeInput, RecipeIngredientInput, UpdateRecipeInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn default_factor() -> f64 {
    1.0
}

fn default_servings() -> i32 {
    1
}

fn validate_steps(steps: &[String]) -> Result<(), ValidationError> {
    if steps.iter().any(|step| step.trim().is_empty()) {
        return Err(ValidationError::new("preparation_step_empty")
            .with_message("preparation steps must not be empty".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecipeIngredientValidator {
    pub ingredient_id: Uuid,

    #[validate(range(min = 0.01, message = "quantity must be at least 0.01"))]
    pub quantity: f64,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,

    #[validate(range(min = 0.0, message = "gross_weight must be zero or greater"))]
    pub gross_weight: Option<f64>,

    #[validate(range(min = 0.0, message = "net_weight must be zero or greater"))]
    pub net_weight: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 3, max = 100, message = "name must be between 3 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,

    #[serde(default = "default_factor")]
    #[validate(range(min = 0.1, message = "correction_factor must be at least 0.1"))]
    pub correction_factor: f64,

    #[serde(default = "default_factor")]
    #[validate(range(min = 0.1, message = "cooking_index must be at least 0.1"))]
    pub cooking_index: f64,

    #[serde(default = "default_servings")]
    #[validate(range(min = 1, message = "servings must be at least 1"))]
    pub servings: i32,

    #[validate(range(min = 0.0, message = "serving_size must be zero or greater"))]
    pub serving_size: Option<f64>,

    #[serde(default)]
    pub household_measure: Option<String>,

    #[serde(default)]
    pub preparation_type: Option<String>,

    #[serde(default)]
    pub difficulty_level: Option<DifficultyLevel>,

    #[validate(range(min = 1, message = "preparation_time must be at least 1"))]
    pub preparation_time: Option<i32>,

    #[validate(range(min = 1, message = "validity_days must be at least 1"))]
    pub validity_days: Option<i32>,

    #[validate(range(min = 0, message = "monthly_production must be zero or greater"))]
    pub monthly_production: Option<i32>,

    #[serde(default)]
    pub contains_gluten: bool,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(
        length(min = 1, message = "recipe must have at least one ingredient"),
        nested
    )]
    pub ingredients: Vec<RecipeIngredientValidator>,

    #[serde(default)]
    #[validate(custom(function = validate_steps))]
    pub preparation_steps: Vec<String>,
}

/// Same shape as creation: edits are full replacements because the form
/// resubmits the whole recipe.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeValidator {
    #[validate(length(min = 3, max = 100, message = "name must be between 3 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,

    #[serde(default = "default_factor")]
    #[validate(range(min = 0.1, message = "correction_factor must be at least 0.1"))]
    pub correction_factor: f64,

    #[serde(default = "default_factor")]
    #[validate(range(min = 0.1, message = "cooking_index must be at least 0.1"))]
    pub cooking_index: f64,

    #[serde(default = "default_servings")]
    #[validate(range(min = 1, message = "servings must be at least 1"))]
    pub servings: i32,

    #[validate(range(min = 0.0, message = "serving_size must be zero or greater"))]
    pub serving_size: Option<f64>,

    #[serde(default)]
    pub household_measure: Option<String>,

    #[serde(default)]
    pub preparation_type: Option<String>,

    #[serde(default)]
    pub difficulty_level: Option<DifficultyLevel>,

    #[validate(range(min = 1, message = "preparation_time must be at least 1"))]
    pub preparation_time: Option<i32>,

    #[validate(range(min = 1, message = "validity_days must be at least 1"))]
    pub validity_days: Option<i32>,

    #[validate(range(min = 0, message = "monthly_production must be zero or greater"))]
    pub monthly_production: Option<i32>,

    #[serde(default)]
    pub contains_gluten: bool,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(
        length(min = 1, message = "recipe must have at least one ingredient"),
        nested
    )]
    pub ingredients: Vec<RecipeIngredientValidator>,

    #[serde(default)]
    #[validate(custom(function = validate_steps))]
    pub preparation_steps: Vec<String>,
}

impl From<RecipeIngredientValidator> for RecipeIngredientInput {
    fn from(validator: RecipeIngredientValidator) -> Self {
        Self {
            ingredient_id: validator.ingredient_id,
            quantity: validator.quantity,
            unit: validator.unit,
            gross_weight: validator.gross_weight,
            net_weight: validator.net_weight,
        }
    }
}

impl From<CreateRecipeValidator> for CreateRecipeInput {
    fn from(validator: CreateRecipeValidator) -> Self {
        Self {
            name: validator.name,
            category: validator.category,
            unit: validator.unit,
            correction_factor: validator.correction_factor,
            cooking_index: validator.cooking_index,
            servings: validator.servings,
            serving_size: validator.serving_size,
            household_measure: validator.household_measure,
            preparation_type: validator.preparation_type,
            difficulty_level: validator.difficulty_level,
            preparation_time: validator.preparation_time,
            validity_days: validator.validity_days,
            monthly_production: validator.monthly_production,
            contains_gluten: validator.contains_gluten,
            allergens: validator.allergens,
            notes: validator.notes,
            image_url: validator.image_url,
            ingredients: validator.ingredients.into_iter().map(Into::into).collect(),
            preparation_steps: validator.preparation_steps,
        }
    }
}

impl From<UpdateRecipeValidator> for UpdateRecipeInput {
    fn from(validator: UpdateRecipeValidator) -> Self {
        Self {
            name: validator.name,
            category: validator.category,
            unit: validator.unit,
            correction_factor: validator.correction_factor,
            cooking_index: validator.cooking_index,
            servings: validator.servings,
            serving_size: validator.serving_size,
            household_measure: validator.household_measure,
            preparation_type: validator.preparation_type,
            difficulty_level: validator.difficulty_level,
            preparation_time: validator.preparation_time,
            validity_days: validator.validity_days,
            monthly_production: validator.monthly_production,
            contains_gluten: validator.contains_gluten,
            allergens: validator.allergens,
            notes: validator.notes,
            image_url: validator.image_url,
            ingredients: validator.ingredients.into_iter().map(Into::into).collect(),
            preparation_steps: validator.preparation_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CreateRecipeValidator {
        CreateRecipeValidator {
            name: "Quinoa salad".to_string(),
            category: "Salad".to_string(),
            unit: "kg".to_string(),
            correction_factor: 1.0,
            cooking_index: 1.0,
            servings: 2,
            serving_size: None,
            household_measure: None,
            preparation_type: None,
            difficulty_level: Some(DifficultyLevel::Easy),
            preparation_time: Some(20),
            validity_days: Some(3),
            monthly_production: Some(0),
            contains_gluten: false,
            allergens: vec![],
            notes: None,
            image_url: None,
            ingredients: vec![RecipeIngredientValidator {
                ingredient_id: Uuid::new_v4(),
                quantity: 100.0,
                unit: "g".to_string(),
                gross_weight: None,
                net_weight: None,
            }],
            preparation_steps: vec!["Mix everything".to_string()],
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn short_names_are_rejected() {
        let mut payload = valid_payload();
        payload.name = "ab".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn recipes_without_ingredients_are_rejected() {
        let mut payload = valid_payload();
        payload.ingredients.clear();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn tiny_quantities_are_rejected() {
        let mut payload = valid_payload();
        payload.ingredients[0].quantity = 0.001;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn blank_preparation_steps_are_rejected() {
        let mut payload = valid_payload();
        payload.preparation_steps.push("   ".to_string());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn correction_factor_below_floor_is_rejected() {
        let mut payload = valid_payload();
        payload.correction_factor = 0.05;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn zero_servings_are_rejected() {
        let mut payload = valid_payload();
        payload.servings = 0;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn malformed_image_urls_are_rejected() {
        let mut payload = valid_payload();
        payload.image_url = Some("not a url".to_string());
        assert!(payload.validate().is_err());
    }
}
