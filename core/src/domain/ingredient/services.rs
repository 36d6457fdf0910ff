use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        entities::Ingredient,
        ports::{IngredientRepository, IngredientService},
    },
    recipe::ports::RecipeRepository,
    storage::ports::ObjectStoragePort,
};

/// Search is only dispatched once the query is at least this long.
const SEARCH_MIN_CHARS: usize = 3;
/// Fixed cap on search results.
const SEARCH_RESULT_LIMIT: u64 = 10;

impl<R, I, OS> IngredientService for Service<R, I, OS>
where
    R: RecipeRepository,
    I: IngredientRepository,
    OS: ObjectStoragePort,
{
    async fn search_ingredients(&self, query: &str) -> Result<Vec<Ingredient>, CoreError> {
        let query = query.trim();
        if query.chars().count() < SEARCH_MIN_CHARS {
            return Ok(Vec::new());
        }

        self.ingredient_repository
            .search_by_name(query, SEARCH_RESULT_LIMIT)
            .await
    }

    async fn get_ingredient(&self, ingredient_id: Uuid) -> Result<Ingredient, CoreError> {
        self.ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
