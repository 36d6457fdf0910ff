use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::recipe::entities::DifficultyLevel;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredientInput {
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub gross_weight: Option<f64>,
    pub net_weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeInput {
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

/// Edits are full replacements: the form resubmits the whole recipe, so the
/// update input carries the same shape as creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeInput {
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

#[derive(Debug, Clone, Default)]
pub struct GetRecipesFilter {
    pub category: Option<String>,
    /// Case-insensitive substring match on the recipe name.
    pub search: Option<String>,
    /// Zero-based page index; an empty page signals the end of data.
    pub page: Option<u32>,
}
