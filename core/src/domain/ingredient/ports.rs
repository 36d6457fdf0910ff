use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, ingredient::entities::Ingredient};

/// Repository trait for ingredient records
#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn search_by_name(
        &self,
        query: &str,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;
}

pub trait IngredientService: Send + Sync {
    /// Case-insensitive substring search over ingredient names. Queries
    /// shorter than three characters return an empty list without touching
    /// the store; results are capped at ten.
    fn search_ingredients(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;
}
