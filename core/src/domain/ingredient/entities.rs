use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A nutritional reference record. All six nutrient fields are expressed
/// per 100 reference units (the reference basis), independent of the unit
/// a recipe line item is entered in.
///
/// Ingredient rows are maintained out of band from nutritional reference
/// tables; the service surface is read-only over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    /// Source table the nutrient profile was taken from (e.g. TACO, USDA).
    pub nutritional_table: Option<String>,
    pub calories: f64,
    pub proteins: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    pub fiber: f64,
    pub sodium: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
